use roster_cli::{build_cli, init_tracing, run};

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&matches, &mut out) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
