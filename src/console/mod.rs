//! console
//!
//! Interactive contract console: the read-parse-dispatch-print loop.
//!
//! # Architecture
//!
//! [`Console`] is the session for one CLI invocation. It owns the loaded
//! contract description and the remote-call capability, both read-only
//! after construction, and drives one cooperative loop:
//!
//! ```text
//! Prompting -> Reading -> Parsing -> Dispatching -> Printing -> Prompting
//! ```
//!
//! The loop leaves that cycle only when the input stream closes. Every
//! failure condition - incomplete line, parse error, unknown function,
//! rejected call - prints and returns to the prompt.
//!
//! Dispatch is serialized: the loop awaits an in-flight remote call before
//! prompting again, so there is never more than one pending call. Input
//! typed meanwhile sits in the stream's buffer until the next read.
//!
//! # Example
//!
//! ```
//! use meridian_cli::client::MockNodeClient;
//! use meridian_cli::console::Console;
//! use meridian_cli::core::abi::Abi;
//!
//! # tokio_test::block_on(async {
//! let abi = Abi::from_json(
//!     r#"[{"type": "readonly", "name": "get", "outputs": [{"type": "int"}]}]"#,
//! ).unwrap();
//! let console = Console::new(abi, Box::new(MockNodeClient::new()));
//!
//! let input = b"get()\n" as &[u8];
//! let mut output = Vec::new();
//! console.run_with(input, &mut output).await.unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("null"));
//! assert!(output.ends_with("catch you later~\n"));
//! # });
//! ```

pub mod grammar;

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::client::{ClientError, NodeClient};
use crate::core::abi::{Abi, AbiKind};
use self::grammar::{parse_line, Literal, MetaCommand, Parsed, Statement};

/// Prompt printed before each read.
pub const PROMPT: &str = "mrd> ";

/// Printed when the input stream closes.
const FAREWELL: &str = "catch you later~";

/// Errors from dispatching a parsed call.
///
/// All of these are printed and survived; none terminates the loop.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The name is neither a meta-command nor an ABI entry.
    #[error("{0} is not a contract function")]
    NotAContractFunction(String),

    /// A file-reference argument pointed at an unreadable file.
    #[error("could not read file: {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// The remote call capability rejected the call.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// The interactive console session.
///
/// Construct once per CLI invocation, then [`run`](Console::run) (or
/// [`run_with`](Console::run_with) over explicit streams) until end of
/// input.
pub struct Console {
    abi: Abi,
    client: Box<dyn NodeClient>,
}

impl Console {
    pub fn new(abi: Abi, client: Box<dyn NodeClient>) -> Self {
        Self { abi, client }
    }

    /// Run the console over stdin/stdout until end of input.
    pub async fn run(&self) -> std::io::Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run_with(reader, &mut stdout).await
    }

    /// Run the console over explicit streams until the reader is exhausted.
    ///
    /// Only I/O errors on the streams themselves propagate; everything the
    /// user can cause by typing is printed and survived.
    pub async fn run_with<R, W>(&self, reader: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.lines();
        Self::prompt(out)?;
        while let Some(line) = lines.next_line().await? {
            self.handle_line(&line, out).await?;
            Self::prompt(out)?;
        }
        writeln!(out)?;
        writeln!(out, "{FAREWELL}")?;
        Ok(())
    }

    fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    /// Steps 1-8 of the per-line cycle.
    async fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> std::io::Result<()> {
        match parse_line(line) {
            Ok(Parsed::Incomplete) => {
                writeln!(out, "Incomplete statement: \"{line}\"")
            }
            Err(e) => {
                writeln!(out, "error: {e}")
            }
            Ok(Parsed::Statement(Statement::Meta(MetaCommand::Abi))) => {
                write!(out, "{}", self.abi.render_listing())
            }
            Ok(Parsed::Statement(Statement::Call { name, args })) => {
                match self.execute(&name, args).await {
                    Ok(value) => writeln!(out, "{value}"),
                    Err(e) => writeln!(out, "error: {e}"),
                }
            }
        }
    }

    /// Execute a parsed call against the session.
    ///
    /// The name must be callable per the loaded ABI; file-reference
    /// arguments are resolved here, after parsing and before the remote
    /// call.
    async fn execute(&self, name: &str, args: Vec<Literal>) -> Result<Value, DispatchError> {
        let entry = self
            .abi
            .callable(name)
            .ok_or_else(|| DispatchError::NotAContractFunction(name.to_string()))?;

        let mut resolved = Vec::with_capacity(args.len());
        for arg in args {
            resolved.push(resolve_argument(arg).await?);
        }

        match entry.kind {
            AbiKind::Function => Ok(self.client.transaction_call(name, resolved).await?),
            AbiKind::Readonly => Ok(self.client.readonly_call(name, resolved).await?),
            AbiKind::Other => Err(DispatchError::NotAContractFunction(name.to_string())),
        }
    }
}

/// Lower a literal to the wire value handed to the node client.
///
/// File references are read here - the grammar only carried the path - and
/// travel as base64, the encoding the node expects for binary parameters.
async fn resolve_argument(arg: Literal) -> Result<Value, DispatchError> {
    Ok(match arg {
        Literal::Int(n) => Value::from(n),
        Literal::Float(x) => Value::from(x),
        Literal::Bool(b) => Value::from(b),
        Literal::Str(s) => Value::from(s),
        Literal::FileRef(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| DispatchError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            Value::from(BASE64.encode(bytes))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockNodeClient;
    use serde_json::json;

    fn sample_abi() -> Abi {
        Abi::from_json(
            r#"[
                {"type": "function", "name": "set",
                 "inputs": [{"name": "x", "type": "int"}],
                 "outputs": [{"type": "bool"}]},
                {"type": "readonly", "name": "get",
                 "inputs": [], "outputs": [{"type": "int"}]}
            ]"#,
        )
        .unwrap()
    }

    async fn run_script(client: MockNodeClient, script: &str) -> String {
        let console = Console::new(sample_abi(), Box::new(client));
        let mut output = Vec::new();
        console
            .run_with(script.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn function_entry_goes_down_the_transaction_path() {
        let client = MockNodeClient::new().with_result("set", json!(true));
        let output = run_script(client.clone(), "set(42)\n").await;
        assert!(output.contains("true"));

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].readonly);
        assert_eq!(calls[0].args, vec![json!(42)]);
    }

    #[tokio::test]
    async fn readonly_entry_goes_down_the_query_path() {
        let client = MockNodeClient::new().with_result("get", json!(7));
        let output = run_script(client.clone(), "get()\n").await;
        assert!(output.contains('7'));
        assert!(client.calls()[0].readonly);
    }

    #[tokio::test]
    async fn unknown_function_fails_at_dispatch_not_parse() {
        let client = MockNodeClient::new();
        let output = run_script(client.clone(), "quit()\n").await;
        assert!(output.contains("quit is not a contract function"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn incomplete_line_echoes_and_continues() {
        let client = MockNodeClient::new().with_result("get", json!(1));
        let output = run_script(client.clone(), "get(\nget()\n").await;
        assert!(output.contains("Incomplete statement: \"get(\""));
        // the loop survived and dispatched the next line
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn parse_error_prints_and_continues() {
        let client = MockNodeClient::new();
        let output = run_script(client.clone(), "set(1,,2)\nabi\n").await;
        assert!(output.contains("error: unexpected character"));
        assert!(output.contains("Functions:"));
    }

    #[tokio::test]
    async fn client_rejection_is_printed_not_fatal() {
        let client = MockNodeClient::new().with_failure(
            "set",
            ClientError::ApiError {
                status: 400,
                message: "bad nonce".into(),
            },
        );
        let output = run_script(client, "set(1)\nget()\n").await;
        assert!(output.contains("error: API error: 400 - bad nonce"));
        assert!(output.contains("null"));
    }

    #[tokio::test]
    async fn missing_file_parses_but_fails_at_dispatch() {
        let client = MockNodeClient::new();
        let output = run_script(
            client.clone(),
            "set(f:\"/definitely/not/here.bin\")\n",
        )
        .await;
        assert!(output.contains("error: could not read file: /definitely/not/here.bin"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn file_reference_resolves_to_base64_contents() {
        use std::io::Write as _;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"wasm bytes").unwrap();

        let client = MockNodeClient::new();
        let script = format!("set(f:\"{}\")\n", file.path().display());
        run_script(client.clone(), &script).await;

        let calls = client.calls();
        assert_eq!(calls[0].args, vec![json!(BASE64.encode(b"wasm bytes"))]);
    }

    #[tokio::test]
    async fn abi_listing_prints_both_sections() {
        let output = run_script(MockNodeClient::new(), "abi\n").await;
        let expected = "\nFunctions:\n  set(int) -> bool\n\nReadOnly Functions:\n  get() -> int\n\n";
        assert!(output.contains(expected));
    }

    #[tokio::test]
    async fn every_line_is_preceded_by_a_prompt() {
        let output = run_script(MockNodeClient::new(), "abi\n").await;
        assert!(output.starts_with(PROMPT));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[tokio::test]
    async fn eof_prints_farewell() {
        let output = run_script(MockNodeClient::new(), "").await;
        assert_eq!(output, format!("{PROMPT}\n{FAREWELL}\n"));
    }
}
