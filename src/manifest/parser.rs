//! Line-oriented parser for the subset of the `go.mod` grammar the walk needs.
//!
//! Only `module` and `require` carry information for us. Every other
//! directive is recognised and skipped, including its parenthesised block
//! form, so that real-world manifests parse cleanly.

use super::{GoMod, Requirement};

/// Directives that are valid in a `go.mod` but irrelevant to the walk.
const SKIPPED_DIRECTIVES: &[&str] =
    &["go", "toolchain", "replace", "exclude", "retract", "godebug", "tool", "ignore"];

/// A parse failure with the 1-based line it occurred on (0 when the problem
/// is not tied to a line, such as a missing `module` directive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Line number, starting at 1.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Require,
    Skipped,
}

/// Parse `go.mod` source text.
///
/// Requirements are returned in declaration order.
pub fn parse(content: &str) -> Result<GoMod, ParseError> {
    let mut module: Option<String> = None;
    let mut requires = Vec::new();
    let mut block: Option<(Block, usize)> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let (code, comment) = split_comment(raw_line);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        if let Some((kind, _)) = block {
            if code == ")" {
                block = None;
                continue;
            }
            if kind == Block::Require {
                requires.push(parse_requirement(code, comment, line_no)?);
            }
            continue;
        }

        // `(` is a token of its own, so `require(` opens a block too.
        let split_at = code.find(|c: char| c.is_whitespace() || c == '(').unwrap_or(code.len());
        let (directive, rest) = (&code[..split_at], code[split_at..].trim());
        let opener = block_opener(rest);

        match directive {
            "module" => {
                if module.is_some() {
                    return Err(error(line_no, "repeated module statement"));
                }
                if rest.is_empty() {
                    return Err(error(line_no, "usage: module module/path"));
                }
                module = Some(unquote(rest, line_no)?);
            }
            "require" => {
                match opener {
                    Some(BlockOpener::Open) => block = Some((Block::Require, line_no)),
                    Some(BlockOpener::Empty) => {}
                    None if rest.is_empty() => {
                        return Err(error(line_no, "usage: require module/path v1.2.3"));
                    }
                    None => requires.push(parse_requirement(rest, comment, line_no)?),
                }
            }
            d if SKIPPED_DIRECTIVES.contains(&d) => {
                if opener == Some(BlockOpener::Open) {
                    block = Some((Block::Skipped, line_no));
                }
            }
            other => {
                return Err(error(line_no, format!("unknown directive: {other}")));
            }
        }
    }

    if let Some((_, opened_at)) = block {
        return Err(error(opened_at, "unterminated block: missing ')'"));
    }

    let module = module.ok_or_else(|| error(0, "no module directive found"))?;

    Ok(GoMod {
        module,
        requires,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockOpener {
    /// `(` with the entries on the following lines.
    Open,
    /// `()` opened and closed on the same line.
    Empty,
}

fn block_opener(rest: &str) -> Option<BlockOpener> {
    let compact: String = rest.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.as_str() {
        "(" => Some(BlockOpener::Open),
        "()" => Some(BlockOpener::Empty),
        _ => None,
    }
}

fn parse_requirement(
    code: &str,
    comment: Option<&str>,
    line_no: usize,
) -> Result<Requirement, ParseError> {
    let tokens = tokenize(code, line_no)?;
    match tokens.as_slice() {
        [path, version] => Ok(Requirement {
            path: path.clone(),
            version: version.clone(),
            indirect: comment.is_some_and(|c| c.trim() == "indirect"),
            comment: comment.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
        }),
        [_] => Err(error(line_no, "usage: require module/path v1.2.3 (missing version)")),
        _ => Err(error(line_no, "usage: require module/path v1.2.3")),
    }
}

/// Split a line at the first `//` that is not inside a quoted string.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut quote: Option<char> = None;
    let mut prev_slash = false;

    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '`' => quote = Some(c),
            None if c == '/' && prev_slash => {
                return (&line[..i - 1], Some(&line[i + 1..]));
            }
            None => {}
        }
        prev_slash = quote.is_none() && c == '/';
    }

    (line, None)
}

/// Whitespace tokenizer that keeps quoted strings intact.
fn tokenize(code: &str, line_no: usize) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = code.trim_start();

    while !rest.is_empty() {
        let first = rest.chars().next().unwrap_or_default();
        let (token, remaining) = if first == '"' || first == '`' {
            let end = rest[1..]
                .find(first)
                .ok_or_else(|| error(line_no, "unterminated quoted string"))?;
            (&rest[..end + 2], &rest[end + 2..])
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            (&rest[..end], &rest[end..])
        };
        tokens.push(unquote(token, line_no)?);
        rest = remaining.trim_start();
    }

    Ok(tokens)
}

fn unquote(token: &str, line_no: usize) -> Result<String, ParseError> {
    let token = token.trim();
    for q in ['"', '`'] {
        if let Some(inner) = token.strip_prefix(q) {
            return inner
                .strip_suffix(q)
                .map(str::to_string)
                .ok_or_else(|| error(line_no, "unterminated quoted string"));
        }
    }
    Ok(token.to_string())
}

fn error(line: usize, message: impl Into<String>) -> ParseError {
    ParseError {
        line,
        message: message.into(),
    }
}
