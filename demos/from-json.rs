use resume_gen::ResumeRecord;

/// Reads a resume record as JSON from a file given on the command line (or
/// stdin) and writes the rendered PDF next to it. The template name comes
/// from an optional second argument.
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let template = args.next().unwrap_or_else(|| "traditional".to_string());

    let json = match &input {
        Some(path) => std::fs::read_to_string(path).expect("can read input file"),
        None => std::io::read_to_string(std::io::stdin()).expect("can read stdin"),
    };

    let record: ResumeRecord = serde_json::from_str(&json).expect("input is a valid record");
    let bytes = resume_gen::render_resume(&record, &template).expect("render succeeds");

    let output = "resume.pdf";
    std::fs::write(output, bytes).expect("can write output");
    println!("wrote {output}");
}
