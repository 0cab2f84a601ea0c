use pdf_summary::report::walktracker;
use pdf_summary::{build_pdf, LayoutConfig, DEFAULT_OUTPUT_PATH};

fn main() {
    env_logger::init();

    match build_pdf(DEFAULT_OUTPUT_PATH, &LayoutConfig::default(), &walktracker()) {
        Ok(final_y) => println!("final_y={:.2}", final_y.0),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
