#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GfError {
    #[error("unsupported field width: {0} (must be 1..=16)")]
    UnsupportedWidth(u32),
    #[error("reduction polynomial {polynomial:#x} is not primitive for w={width}: cycle closed after {cycle} steps")]
    NotPrimitive { polynomial: u32, width: u32, cycle: usize },
    #[error("division by zero field element")]
    DivisionByZero,
    #[error("zero field element has no inverse")]
    ZeroInverse,
    #[error("generator coefficient {index} is the zero element")]
    ZeroGeneratorCoefficient { index: usize },
    #[error("{name} too short (expected at least {expected}, got {got})")]
    BufferTooShort { name: &'static str, expected: usize, got: usize },
    #[error("symbol {index} has value {value:#x}, outside the field (max {max:#x})")]
    SymbolOutOfRange { index: usize, value: u16, max: usize },
    #[error("params invalid: {0}")]
    InvalidParams(#[from] ParamError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("invalid npar (must be >= 1): {0}")]
    InvalidNpar(usize),
    #[error("npar must be < field size, got npar={npar}, max={max}")]
    NparTooLarge { npar: usize, max: usize },
    #[error("codeword too long for field: length={length}, max={max}")]
    CodewordTooLong { length: usize, max: usize },
}
