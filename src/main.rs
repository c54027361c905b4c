//! ugit binary entry point.

use std::process;

use ugit::cli;
use ugit::context::Context;
use ugit::logging;

fn main() {
    let ctx = Context::new(None);
    logging::init(&ctx);

    if let Err(err) = cli::run(&ctx) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
