/// Knowledge base construction errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("atom {name} is defined more than once")]
    DuplicateAtom { name: String },

    #[error("unknown atom {name} referenced by {context}")]
    UnknownAtom { name: String, context: String },

    #[error("self-loop on atom {name} is not a valid causal link")]
    SelfLoop { name: String },

    #[error("symptom {symptom} is defined more than once")]
    DuplicateSymptom { symptom: String },

    #[error("{matrix} matrix row {row}: expected {expected} columns, got {actual}")]
    MatrixShape {
        matrix: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{matrix} matrix: expected {expected} rows, got {actual}")]
    MatrixRows {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("atom universe too large: {count} atoms, max {max}")]
    TooManyAtoms { count: usize, max: usize },

    #[error("failed to parse knowledge base definition: {message}")]
    ParseError { message: String },
}
