use std::{
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
const DELIMITER: &str = "ghadelimiter";

/// Destination of step outputs and the failure signal
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;

    fn set_failed(&mut self, message: &str);
}

impl<S> OutputSink for &mut S
where
    S: OutputSink,
{
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        (**self).set_output(name, value)
    }

    fn set_failed(&mut self, message: &str) {
        (**self).set_failed(message)
    }
}

/// Writes outputs the way a GitHub Actions runner reads them
pub struct ActionsOutput {
    output_file: Option<PathBuf>,
    failed: bool,
}

impl ActionsOutput {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        ActionsOutput {
            output_file,
            failed: false,
        }
    }

    pub fn from_env() -> Self {
        ActionsOutput::new(
            env::var_os(GITHUB_OUTPUT)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        )
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl OutputSink for ActionsOutput {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        log::debug!("setting output {}={}", name, value);

        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(file_command(name, value).as_bytes())
            }
            None => {
                println!(
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        println!("::error::{}", escape_data(message));
    }
}

/// Formats an entry of the `GITHUB_OUTPUT` file. Multi-line values go in a
/// heredoc block whose delimiter does not occur in the value.
fn file_command(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = DELIMITER.to_owned();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }

    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
