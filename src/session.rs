//! The interactive prompt loop
//!
//! A `Session` owns the input and output streams so the same loop drives the
//! terminal in the binary and in-memory buffers in tests. Every iteration
//! asks for a word and a font size, renders the sheet and saves it; `q` or
//! the end of input stops the loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use log::{debug, warn};

use crate::output::{ensure_dir, save_sheet};
use crate::{render_sheet, Error, LabelRequest, Result, SheetConfig};

/// Typed at the word prompt to end the session
pub const QUIT: &str = "q";

/// Outcome of one iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Saved(PathBuf),
    /// Blank word; nothing rendered
    Skipped,
    Quit,
}

/// `<cwd>/<default dir name>`
pub fn default_save_dir(cwd: &Path, config: &SheetConfig) -> PathBuf {
    cwd.join(&config.default_dir_name)
}

/// Blank selects `default`; anything else must be an integer in `1..=max`.
pub fn parse_font_size(answer: &str, default: u32, max: u32) -> Result<u32> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    match answer.parse::<u32>() {
        Ok(size) if size > 0 && size <= max => Ok(size),
        _ => Err(Error::InvalidFontSize(answer.to_string())),
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    font: FontArc,
    config: SheetConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, font: FontArc, config: SheetConfig) -> Self {
        Self {
            input,
            output,
            font,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask where sheets should be saved, offering `default`.
    pub fn prompt_save_dir(&mut self, default: &Path) -> Result<PathBuf> {
        let answer = self.ask(&format!("Save Location({}): ", default.display()))?;
        Ok(match answer {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default.to_path_buf(),
        })
    }

    /// Ask for the next word and its font size. `None` means quit.
    ///
    /// A blank word is returned as-is without asking for a size.
    pub fn read_request(&mut self) -> Result<Option<LabelRequest>> {
        let default_size = self.config.default_font_size;
        let max_size = self.config.max_font_size;
        let label = match self.ask("Enter Word(or q to quit): ")? {
            Some(word) if word != QUIT => word,
            _ => return Ok(None),
        };
        if label.is_empty() {
            return Ok(Some(LabelRequest::new(label, default_size)));
        }

        let question = format!("Font Size(default {}): ", default_size);
        let font_size = match self.ask(&question)? {
            Some(answer) => parse_font_size(&answer, default_size, max_size)?,
            None => default_size,
        };
        Ok(Some(LabelRequest::new(label, font_size)))
    }

    /// One iteration: make sure `dir` exists, read a request, render and save.
    pub fn step(&mut self, dir: &Path) -> Result<Step> {
        if ensure_dir(dir)? {
            writeln!(self.output, "Directory created: {}", dir.display())?;
        } else {
            writeln!(self.output, "Directory already exists: {}", dir.display())?;
        }

        let Some(request) = self.read_request()? else {
            return Ok(Step::Quit);
        };
        if request.label.is_empty() {
            warn!("empty word, nothing to render");
            return Ok(Step::Skipped);
        }

        let sheet = render_sheet(&self.font, &request, &self.config)?;
        debug!("sheet digest {}", sheet.digest());
        let path = save_sheet(dir, &request.label, &sheet)?;
        writeln!(self.output, "Saved {}", path.display())?;
        Ok(Step::Saved(path))
    }

    /// Repeat `step` until the user quits. The first error ends the session.
    pub fn run(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut saved = Vec::new();
        loop {
            match self.step(dir)? {
                Step::Saved(path) => saved.push(path),
                Step::Skipped => {}
                Step::Quit => return Ok(saved),
            }
        }
    }
}
