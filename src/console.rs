use std::io::{self, BufRead, Write};

/// Line-oriented terminal the game talks through.
pub trait Console {
    /// Shows `prompt` and reads one line without its terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn print_line(&mut self, line: &str);

    fn clear_screen(&mut self);
}

/// Reads one line, decoding invalid UTF-8 lossily so a garbled line is just
/// bad input. Only end of stream or a hard read error yields `None`.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut buf = Vec::new();
    loop {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                return Some(line.trim_end_matches(['\r', '\n']).to_string());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("failed to read from stdin: {}", e);
                return None;
            }
        }
    }
}

pub struct Terminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut out = self.stdout.lock();
        let _ = write!(out, "{}", prompt);
        let _ = out.flush();
        drop(out);

        read_line_from(&mut self.stdin.lock())
    }

    fn print_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = self.stdout.flush();
    }
}
