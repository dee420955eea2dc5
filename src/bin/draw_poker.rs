use draw_poker::session::Session;
use rand::Rng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let seed: u64 = rand::rng().random();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(seed, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
