use thiserror::Error;

/// Everything that can stop a compress or extract run.
#[derive(Error, Debug)]
pub enum HfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a Huffman archive")]
    NotAnArchive,
    #[error("archive header or tree table is truncated")]
    TruncatedHeader,
    #[error("corrupt tree table: node {node} refers to child {child}")]
    CorruptTree { node: usize, child: i16 },
    #[error("incomplete archive: expected {expected} bytes, decoded {decoded}")]
    IncompleteArchive { expected: u64, decoded: u64 },
}

impl HfError {
    /// Process exit code reported by the command line tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            HfError::Io(_) => 1,
            _ => 2,
        }
    }

    /// Map an unexpected end of input to `on_eof`, keeping any other I/O error as is.
    pub(crate) fn eof_as(err: std::io::Error, on_eof: HfError) -> HfError {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            on_eof
        } else {
            HfError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, HfError>;
