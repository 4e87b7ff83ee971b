use super::AlignmentMatrixIndex;

/// The direction in which a boundary line of the matrix is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Increasing positions in `x` at a fixed position in `y`.
    X,
    /// Increasing positions in `y` at a fixed position in `x`.
    Y,
}

/// Walks a boundary line of the matrix, starting at position zero of the axis.
pub struct AlignmentMatrixLineIterator {
    index: AlignmentMatrixIndex,
    axis: Axis,
    limit: usize,
}

/// Visits the cells that are filled by the recurrence, i.e. all cells with both positions greater than zero.
///
/// Cells are visited by increasing `y`, and by increasing `x` for the same `y`.
/// Hence the diagonal, deletion and insertion predecessors of a cell are visited before it.
pub struct AlignmentMatrixInnerIterator {
    next: Option<AlignmentMatrixIndex>,
    limit: AlignmentMatrixIndex,
}

impl AlignmentMatrixLineIterator {
    /// Walks the line through `fixed` on the other axis up to the exclusive `limit`.
    pub(in crate::alignment_matrix) fn new(axis: Axis, fixed: usize, limit: usize) -> Self {
        let index = match axis {
            Axis::X => AlignmentMatrixIndex::new(0, fixed),
            Axis::Y => AlignmentMatrixIndex::new(fixed, 0),
        };

        Self { index, axis, limit }
    }

    fn position(&mut self) -> &mut usize {
        match self.axis {
            Axis::X => &mut self.index.x_index,
            Axis::Y => &mut self.index.y_index,
        }
    }
}

impl AlignmentMatrixInnerIterator {
    /// `limit` is the dimension of the matrix, i.e. `(|x| + 1, |y| + 1)`.
    pub(in crate::alignment_matrix) fn new(limit: AlignmentMatrixIndex) -> Self {
        debug_assert!(limit.x_index > 0);
        debug_assert!(limit.y_index > 0);

        let has_inner_cells = limit.x_index > 1 && limit.y_index > 1;
        Self {
            next: has_inner_cells.then(|| AlignmentMatrixIndex::new(1, 1)),
            limit,
        }
    }
}

impl Iterator for AlignmentMatrixLineIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let limit = self.limit;
        let current = self.index;
        let position = self.position();

        if *position < limit {
            *position += 1;
            Some(current)
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixInnerIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut following = current;
        following.x_index += 1;
        if following.x_index == self.limit.x_index {
            following.x_index = 1;
            following.y_index += 1;
        }
        self.next = (following.y_index < self.limit.y_index).then_some(following);

        Some(current)
    }
}
