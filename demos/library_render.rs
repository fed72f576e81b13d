// Render the built-in catalog to stdout as JSON, using certfolio as a
// library. Run with: cargo run --example library_render

use certfolio::output;
use certfolio::session::{Options, Session};

fn main() -> Result<(), String> {
    let session = Session::new(Options::default()).map_err(|e| e.to_string())?;

    let records = output::build_records(session.records());
    let rendered = output::render_json(&records);
    println!("{}", String::from_utf8_lossy(&rendered));

    Ok(())
}
