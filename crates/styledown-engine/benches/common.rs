// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section *1*\n\nParagraph with _some_ content and *emphasis*.\nA second line with a stray * star.\n\n---\n\n\n";
    base.repeat(size)
}

/// Long runs of delimiters that never close properly.
#[allow(dead_code)]
pub fn generate_adversarial_content(lines: usize, width: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        let line = match i % 3 {
            0 => "*".repeat(width),
            1 => "_*".repeat(width / 2),
            _ => format!("*{}", "a".repeat(width)),
        };
        content.push_str(&line);
        content.push('\n');
    }
    content
}
