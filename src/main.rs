use funil::cli::run;

fn main() {
    env_logger::init();
    // Older Windows consoles need ANSI explicitly enabled; a failure here
    // just means uncolored output.
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        let error_str: String = e.to_string();
        if error_str.contains("Failed to") {
            // Internal error (snapshot I/O, serialization)
            eprintln!("Internal error: {}", e);
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            // User error
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
