//! Interactive command dispatcher.
//!
//! A [`Session`] reads a menu choice and the paths it needs, one line each,
//! runs the matching filesystem operation and writes the outcome. Every
//! failure is reported and the loop continues; only Exit, end of input, a
//! shutdown request or a broken output stream end the session.
//!
//! Paths are read as whole lines with surrounding whitespace trimmed, so names
//! containing spaces work.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::FileManagerError;
use crate::fs_ops::{self, MoveStrategy, SortOrder};
use crate::output::{self as out, Kind};
use crate::shutdown::{self, Busy};

const MENU: &str = "\nFile Management System\n\
1. Create File\n\
2. Read File\n\
3. Delete File\n\
4. Rename File\n\
5. Copy File\n\
6. Move File\n\
7. List Files in Directory\n\
8. Sort Files by Size\n\
9. Exit\n";

const SORT_MENU: &str = "Sort by:\n\
1. Ascending Order (Smallest to Largest)\n\
2. Descending Order (Largest to Smallest)\n";

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 9.";
pub const INVALID_SORT_CHOICE: &str = "Invalid choice. Please select 1 or 2.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Read,
    Delete,
    Rename,
    Copy,
    Move,
    List,
    Sort,
    Exit,
}

impl MenuChoice {
    /// Parse a menu answer (`1`..=`9`, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Result<Self, FileManagerError> {
        let invalid = || FileManagerError::InvalidInput(INVALID_CHOICE.to_string());
        let n: u32 = input.trim().parse().map_err(|_| invalid())?;
        Ok(match n {
            1 => MenuChoice::Create,
            2 => MenuChoice::Read,
            3 => MenuChoice::Delete,
            4 => MenuChoice::Rename,
            5 => MenuChoice::Copy,
            6 => MenuChoice::Move,
            7 => MenuChoice::List,
            8 => MenuChoice::Sort,
            9 => MenuChoice::Exit,
            _ => return Err(invalid()),
        })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuChoice::Create => "create",
            MenuChoice::Read => "read",
            MenuChoice::Delete => "delete",
            MenuChoice::Rename => "rename",
            MenuChoice::Copy => "copy",
            MenuChoice::Move => "move",
            MenuChoice::List => "list",
            MenuChoice::Sort => "sort",
            MenuChoice::Exit => "exit",
        })
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit.
    Exit,
    /// Input was exhausted.
    EndOfInput,
    /// A shutdown was requested (Ctrl-C) during an operation.
    Interrupted,
}

enum Step {
    Failed(FileManagerError),
    Output(io::Error),
    Eof,
}

impl From<FileManagerError> for Step {
    fn from(e: FileManagerError) -> Self {
        match e {
            FileManagerError::Output(e) => Step::Output(e),
            e => Step::Failed(e),
        }
    }
}

impl From<io::Error> for Step {
    fn from(e: io::Error) -> Self {
        Step::Output(e)
    }
}

/// An operation with all of its input already collected.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Create(PathBuf),
    Read(PathBuf),
    Delete(PathBuf),
    Rename { from: PathBuf, to: PathBuf },
    Copy { src: PathBuf, dest: PathBuf },
    Move { src: PathBuf, dest: PathBuf },
    List,
    Sort(SortOrder),
}

type StepResult = Result<(), Step>;

/// One interactive session over an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Give back the output stream (tests inspect what was written).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit, end of input or a shutdown request.
    /// Only failures writing to the output stream are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            if shutdown::is_requested() {
                return Ok(SessionEnd::Interrupted);
            }

            write!(self.output, "{MENU}Enter your choice: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                debug!("Input closed; leaving menu");
                return Ok(SessionEnd::EndOfInput);
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(c) => c,
                Err(e) => {
                    warn!(code = e.code(), input = %line.trim(), "Invalid menu choice");
                    self.say(Kind::Error, &e.to_string())?;
                    continue;
                }
            };
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting...")?;
                self.output.flush()?;
                return Ok(SessionEnd::Exit);
            }

            // Prompts run outside the busy window so Ctrl-C there exits at once.
            let result = match self.gather(choice) {
                Ok(Some(request)) => {
                    let _busy = Busy::enter();
                    if shutdown::is_requested() {
                        return Ok(SessionEnd::Interrupted);
                    }
                    self.execute(request)
                }
                Ok(None) => Ok(()),
                Err(step) => Err(step),
            };
            match result {
                Ok(()) => {}
                Err(Step::Failed(e)) => {
                    info!(op = %choice, code = e.code(), error = %e, "Operation failed");
                    self.say(Kind::Error, &e.to_string())?;
                }
                Err(Step::Output(e)) => return Err(e),
                Err(Step::Eof) => {
                    writeln!(self.output)?;
                    return Ok(SessionEnd::EndOfInput);
                }
            }
            self.output.flush()?;
        }
    }

    /// Prompt for everything `choice` needs. `None` when there is nothing to run.
    fn gather(&mut self, choice: MenuChoice) -> Result<Option<Request>, Step> {
        let request = match choice {
            MenuChoice::Create => Request::Create(self.prompt_path("Enter filename to create: ")?),
            MenuChoice::Read => Request::Read(self.prompt_path("Enter filename to read: ")?),
            MenuChoice::Delete => Request::Delete(self.prompt_path("Enter filename to delete: ")?),
            MenuChoice::Rename => {
                let from = self.prompt_path("Enter current filename: ")?;
                let to = self.prompt_path("Enter new filename: ")?;
                Request::Rename { from, to }
            }
            MenuChoice::Copy => {
                let src = self.prompt_path("Enter source filename to copy: ")?;
                let dest = self.prompt_path("Enter destination filename: ")?;
                Request::Copy { src, dest }
            }
            MenuChoice::Move => {
                let src = self.prompt_path("Enter source filename to move: ")?;
                let dest = self.prompt_path("Enter destination filename: ")?;
                Request::Move { src, dest }
            }
            MenuChoice::List => Request::List,
            MenuChoice::Sort => {
                write!(self.output, "{SORT_MENU}Enter your choice: ")?;
                self.output.flush()?;
                let answer = self.read_line()?.ok_or(Step::Eof)?;
                let Some(order) = SortOrder::from_menu(&answer) else {
                    warn!(input = %answer.trim(), "Invalid sort order");
                    self.say(Kind::Error, INVALID_SORT_CHOICE)?;
                    return Ok(None);
                };
                Request::Sort(order)
            }
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(request))
    }

    fn execute(&mut self, request: Request) -> StepResult {
        match request {
            Request::Create(path) => {
                fs_ops::create_file(&path)?;
                self.say(Kind::Success, &format!("File created successfully: {}", path.display()))?;
            }
            Request::Read(path) => {
                fs_ops::read_file(&path, &mut self.output)?;
            }
            Request::Delete(path) => {
                fs_ops::delete_file(&path)?;
                self.say(Kind::Success, &format!("File deleted successfully: {}", path.display()))?;
            }
            Request::Rename { from, to } => {
                fs_ops::rename_file(&from, &to)?;
                self.say(
                    Kind::Success,
                    &format!("File renamed successfully from {} to {}", from.display(), to.display()),
                )?;
            }
            Request::Copy { src, dest } => {
                let report = fs_ops::copy_file(&src, &dest, self.config.copy_buffer_size)?;
                self.say(
                    Kind::Success,
                    &format!(
                        "File copied successfully from {} to {} ({} bytes)",
                        src.display(),
                        dest.display(),
                        report.bytes
                    ),
                )?;
            }
            Request::Move { src, dest } => {
                let how = fs_ops::move_file(&src, &dest, self.config.copy_buffer_size)?;
                let note = match how {
                    MoveStrategy::Renamed => "",
                    MoveStrategy::CopiedAndRemoved => " (copied across filesystems)",
                };
                self.say(
                    Kind::Success,
                    &format!("File moved successfully from {} to {}{}", src.display(), dest.display(), note),
                )?;
            }
            Request::List => {
                let dir = self.config.work_dir.clone();
                let names = fs_ops::list_dir(&dir)?;
                writeln!(self.output, "Listing files in {}:", dir.display())?;
                for name in names {
                    writeln!(self.output, "{name}")?;
                }
            }
            Request::Sort(order) => {
                let records = fs_ops::sort_by_size(&self.config.work_dir, order)?;
                writeln!(self.output, "Sorted Files:")?;
                for record in &records {
                    writeln!(self.output, "{record}")?;
                }
            }
        }
        Ok(())
    }

    /// Read one line; `None` at end of input. Invalid UTF-8 is replaced lossily.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn prompt_path(&mut self, prompt: &str) -> Result<PathBuf, Step> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let line = self.read_line()?.ok_or(Step::Eof)?;
        let name = line.trim();
        if name.is_empty() {
            return Err(Step::Failed(FileManagerError::InvalidInput(
                "No file name given.".to_string(),
            )));
        }
        Ok(PathBuf::from(name))
    }

    fn say(&mut self, kind: Kind, msg: &str) -> io::Result<()> {
        out::write_line(&mut self.output, kind, msg, self.config.color)
    }
}
