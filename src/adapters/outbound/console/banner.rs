use owo_colors::{OwoColorize, Style};
use std::path::Path;

const TITLE: &str = "Genealogic";
const SUBTITLE: &str = " - C++ Inheritance Tree Visualizer";

/// ConsoleBanner adapter for the human-facing stderr output
///
/// Every `render_*` method returns the text so it can be checked without a
/// terminal; the matching `print_*` method writes it to stderr.
pub struct ConsoleBanner {
    colored: bool,
}

impl ConsoleBanner {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Whether stderr should receive ANSI colors (`NO_COLOR` disables them)
    pub fn detect_color() -> bool {
        use std::io::IsTerminal;
        std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Boxed header naming the base class, directory and extension
    pub fn render_header(&self, base_class: &str, directory: &Path, extension: &str) -> String {
        let directory = directory.display().to_string();
        let rows = [
            ("Base class:  ", base_class, Style::new().cyan().bold()),
            ("Directory:   ", directory.as_str(), Style::new().bold()),
            ("Extension:   ", extension, Style::new().bold()),
        ];

        let inner_width = rows
            .iter()
            .map(|(label, value, _)| 2 + label.chars().count() + value.chars().count())
            .chain(std::iter::once(TITLE.len() + SUBTITLE.len()))
            .max()
            .unwrap_or(0)
            + 4;

        let border = Style::new().blue();
        let horizontal = "─".repeat(inner_width);
        let side = self.paint("│", border);
        let blank = format!("{}{}{}\n", side, " ".repeat(inner_width), side);

        let mut out = String::new();
        out.push_str(&self.paint(&format!("╭{}╮", horizontal), border));
        out.push('\n');
        out.push_str(&blank);

        let title_len = TITLE.len() + SUBTITLE.len();
        out.push_str(&format!(
            "{}  {}{}{}{}\n",
            side,
            self.paint(TITLE, Style::new().magenta().bold()),
            self.paint(SUBTITLE, Style::new().dimmed()),
            " ".repeat(inner_width - 2 - title_len),
            side
        ));
        out.push_str(&blank);

        for (label, value, style) in rows {
            let used = 4 + label.chars().count() + value.chars().count();
            out.push_str(&format!(
                "{}    {}{}{}{}\n",
                side,
                self.paint(label, Style::new().dimmed()),
                self.paint(value, style),
                " ".repeat(inner_width.saturating_sub(used)),
                side
            ));
        }

        out.push_str(&blank);
        out.push_str(&self.paint(&format!("╰{}╯", horizontal), border));
        out.push('\n');
        out
    }

    /// Preview of the formatted tree with its class count
    pub fn render_tree_preview(&self, tree_text: &str, classes: usize) -> String {
        let mut out = String::from("\n");
        out.push_str(&format!(
            "  {} {} {}\n\n",
            self.paint("Inheritance tree:", Style::new().dimmed()),
            self.paint(&classes.to_string(), Style::new().bold()),
            self.paint("classes", Style::new().dimmed())
        ));
        for line in tree_text.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn render_success(&self, message: &str) -> String {
        format!("  {} {}", self.paint("✓", Style::new().green().bold()), message)
    }

    pub fn render_warning(&self, message: &str) -> String {
        format!("  {} {}", self.paint("!", Style::new().yellow().bold()), message)
    }

    pub fn render_error(&self, message: &str) -> String {
        format!("  {} {}", self.paint("✗", Style::new().red().bold()), message)
    }

    pub fn print_header(&self, base_class: &str, directory: &Path, extension: &str) {
        eprint!("{}", self.render_header(base_class, directory, extension));
    }

    pub fn print_tree_preview(&self, tree_text: &str, classes: usize) {
        eprintln!("{}", self.render_tree_preview(tree_text, classes));
    }

    pub fn print_success(&self, message: &str) {
        eprintln!("{}", self.render_success(message));
    }

    pub fn print_warning(&self, message: &str) {
        eprintln!("{}", self.render_warning(message));
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{}", self.render_error(message));
    }
}
