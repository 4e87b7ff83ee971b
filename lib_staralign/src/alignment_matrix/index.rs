use std::ops::{Index, IndexMut};

use ndarray::Array2;

use super::BaseAlignmentType;

pub mod iterators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixIndex {
    pub(in crate::alignment_matrix) x_index: usize,
    pub(in crate::alignment_matrix) y_index: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(x_index: usize, y_index: usize) -> Self {
        Self { x_index, y_index }
    }

    pub fn x_index(&self) -> usize {
        self.x_index
    }

    pub fn y_index(&self) -> usize {
        self.y_index
    }

    pub fn insertion_predecessor(&self) -> Self {
        debug_assert!(self.y_index > 0);

        Self {
            x_index: self.x_index,
            y_index: self.y_index - 1,
        }
    }

    pub fn deletion_predecessor(&self) -> Self {
        debug_assert!(self.x_index > 0);

        Self {
            x_index: self.x_index - 1,
            y_index: self.y_index,
        }
    }

    pub fn match_or_substitution_predecessor(&self) -> Self {
        debug_assert!(self.x_index > 0);
        debug_assert!(self.y_index > 0);

        Self {
            x_index: self.x_index - 1,
            y_index: self.y_index - 1,
        }
    }

    pub fn predecessor(&self, alignment_type: BaseAlignmentType) -> Self {
        match alignment_type {
            BaseAlignmentType::None => {
                panic!("Predecessor type 'None' has no predecessor")
            }
            BaseAlignmentType::Insertion => self.insertion_predecessor(),
            BaseAlignmentType::Deletion => self.deletion_predecessor(),
            BaseAlignmentType::Match | BaseAlignmentType::Substitution => {
                self.match_or_substitution_predecessor()
            }
        }
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.x_index, index.y_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.x_index, index.y_index]]
    }
}
