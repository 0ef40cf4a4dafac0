// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Fixed-size chunking of ordered sequences

use crate::errors::{PipekitError, PipekitResult};

/// Split `items` into consecutive groups of `size`.
///
/// The last group holds the remainder and may be shorter. An empty slice
/// yields no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> PipekitResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(PipekitError::InvalidChunkSize { size });
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Like [`chunk`] but consumes `items`, so elements are moved instead of cloned
pub fn chunk_owned<T>(items: Vec<T>, size: usize) -> PipekitResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(PipekitError::InvalidChunkSize { size });
    }

    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut current = Vec::with_capacity(size.min(items.len()));

    for item in items {
        current.push(item);
        if current.len() == size {
            groups.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_with_remainder() {
        let groups = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_exact_fit() {
        let groups = chunk(&["a", "b", "c", "d"], 2).unwrap();
        assert_eq!(groups, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        assert_eq!(chunk(&[1, 2], 10).unwrap(), vec![vec![1, 2]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let empty: [u8; 0] = [];
        assert!(chunk(&empty, 3).unwrap().is_empty());
        assert!(chunk_owned(Vec::<u8>::new(), 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            chunk(&[1], 0).unwrap_err(),
            PipekitError::InvalidChunkSize { size: 0 }
        );
        assert!(chunk_owned(vec![1], 0).is_err());
    }

    #[test]
    fn test_chunk_owned_moves_items() {
        let names = vec![String::from("a"), String::from("b"), String::from("c")];
        let groups = chunk_owned(names, 2).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1], vec![String::from("c")]);
    }

    #[test]
    fn test_chunk_owned_exact_fit_has_no_trailing_group() {
        let groups = chunk_owned(vec![1, 2, 3, 4, 5, 6], 3).unwrap();

        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert!(groups.iter().all(|group| group.len() == 3));
    }
}
