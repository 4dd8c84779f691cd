use std::io;

fn main() {
    nike_cli::logging::init_logging();
    let code = nike_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
