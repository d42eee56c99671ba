use dashwiz::{init, session};

fn main() {
    init();

    std::process::exit(session::run());
}
