use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapMode {
    None,
    #[default]
    Word,
}

/// Caches the wrapped form of a block of paragraphs for the last width it was asked about.
#[derive(Clone, Debug, Default)]
pub struct WrapCache {
    paragraphs: Vec<String>,
    wrapped: Vec<String>,
    width: Option<u16>,
    mode: WrapMode,
}

impl WrapCache {
    pub fn new(mode: WrapMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replaces the content. Paragraphs are split on `\n`.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(normalize_tabs).collect()
        };
        self.invalidate();
    }

    pub fn set_mode(&mut self, mode: WrapMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.invalidate();
    }

    /// Rewraps if `width` differs from the width of the cached result.
    pub fn set_width(&mut self, width: u16) {
        if self.width == Some(width) {
            return;
        }
        self.width = Some(width);
        self.wrapped = match self.mode {
            WrapMode::None => self.paragraphs.clone(),
            WrapMode::Word => self
                .paragraphs
                .iter()
                .flat_map(|p| word_wrap(p, width))
                .collect(),
        };
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Wrapped lines for the last width passed to [`WrapCache::set_width`]; empty until then.
    pub fn lines(&self) -> &[String] {
        &self.wrapped
    }

    pub fn height(&self) -> u32 {
        self.wrapped.len() as u32
    }

    fn invalidate(&mut self) {
        self.wrapped.clear();
        self.width = None;
    }
}

/// Greedy word wrap. Breaks after whitespace or punctuation when possible and hard-splits words
/// longer than `width`. An empty paragraph yields one empty line.
pub fn word_wrap(paragraph: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![paragraph.to_string()];
    }
    if paragraph.is_empty() {
        return vec![String::new()];
    }

    let max_cols = width as usize;
    let mut out = Vec::new();
    let mut line = String::new();
    let mut line_cols = 0usize;
    let mut soft_break: Option<usize> = None;

    for ch in paragraph.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if line_cols + w > max_cols && ch.is_whitespace() {
            out.push(std::mem::take(&mut line).trim_end().to_string());
            soft_break = None;
            line_cols = 0;
            continue;
        }
        if line_cols + w > max_cols {
            match soft_break {
                Some(split) => {
                    let rest = line.split_off(split);
                    out.push(line.trim_end().to_string());
                    line = rest.trim_start().to_string();
                }
                None if !line.is_empty() => out.push(std::mem::take(&mut line)),
                None => {}
            }
            soft_break = None;
            line_cols = UnicodeWidthStr::width(line.as_str());
            // The carried-over tail plus a wide char can still overflow.
            if line_cols + w > max_cols && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_cols = 0;
            }
        }

        if line.is_empty() && ch.is_whitespace() {
            continue;
        }

        line.push(ch);
        line_cols += w;
        if ch.is_whitespace() || matches!(ch, ',' | ';' | '.' | ':' | '?' | '!' | '-' | '/') {
            soft_break = Some(line.len());
        }
    }

    if !line.is_empty() {
        out.push(line.trim_end().to_string());
    }
    out
}

fn normalize_tabs(s: &str) -> String {
    s.replace('\t', "    ")
}
