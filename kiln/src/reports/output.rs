//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports say *what* to show through these semantic methods; the
/// implementation decides *how* it lands on screen.
pub trait Output {
    /// Start a section with a heading.
    fn section(&mut self, name: &str);

    /// A plain list item.
    fn list_item(&mut self, text: &str);

    /// A removed item (e.g. a deleted file).
    fn removed_item(&mut self, text: &str);

    /// A key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// A failure line.
    fn failure(&mut self, msg: &str);

    /// A block of preformatted tool output.
    fn tool_output(&mut self, text: &str);

    /// A plain line.
    fn line(&mut self, text: &str);

    /// A blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn removed_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn failure(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn tool_output(&mut self, text: &str) {
        for line in text.lines() {
            println!("    {}", line);
        }
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
