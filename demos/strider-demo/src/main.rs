mod game;

use game::DemoSession;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut session = DemoSession::new().expect("failed to load avatar assets");
    session.run();
}
