//! Construction from 0/1 incidence matrices.
//!
//! The symptom matrix has one row per symptom and one column per atom; the
//! adjacency matrix is square with `adjacency[i][j] != 0` meaning atom `i`
//! causes atom `j`.

use crate::errors::KnowledgeError;

use super::{KnowledgeBase, KnowledgeBaseBuilder};

impl KnowledgeBase {
    /// Build from atom names, symptom rows, and a square adjacency matrix.
    pub fn from_matrices(
        atom_names: &[impl AsRef<str>],
        symptom_rows: &[(impl AsRef<str>, Vec<u8>)],
        adjacency: &[Vec<u8>],
    ) -> Result<Self, KnowledgeError> {
        let width = atom_names.len();
        let mut builder = KnowledgeBaseBuilder::new();
        for name in atom_names {
            builder = builder.atom(name.as_ref());
        }

        for (row, (symptom, cells)) in symptom_rows.iter().enumerate() {
            check_width("symptom", row, width, cells.len())?;
            let atoms = cells
                .iter()
                .zip(atom_names)
                .filter(|(&cell, _)| cell != 0)
                .map(|(_, name)| name.as_ref().to_string());
            builder = builder.symptom(symptom.as_ref(), atoms);
        }

        if adjacency.len() != width {
            return Err(KnowledgeError::MatrixRows {
                matrix: "adjacency",
                expected: width,
                actual: adjacency.len(),
            });
        }
        for (i, cells) in adjacency.iter().enumerate() {
            check_width("adjacency", i, width, cells.len())?;
            for (j, &cell) in cells.iter().enumerate() {
                if cell != 0 {
                    builder = builder.link(atom_names[i].as_ref(), atom_names[j].as_ref());
                }
            }
        }

        builder.build()
    }
}

fn check_width(
    matrix: &'static str,
    row: usize,
    expected: usize,
    actual: usize,
) -> Result<(), KnowledgeError> {
    if actual == expected {
        Ok(())
    } else {
        Err(KnowledgeError::MatrixShape {
            matrix,
            row,
            expected,
            actual,
        })
    }
}
