use clap::Parser;
use schnick::*;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    log(config.level());
    log::info!("computer draws {} (seed {:?})", config.draw, config.seed);
    let robot = Robot::new(config.draw, config.seed);
    match config.interactive() {
        true => Session::new(Human::default(), robot).run(),
        false => Session::new(Stdio::std(), robot).run(),
    }
}
