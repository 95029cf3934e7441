//! Shortest edit script search.
//!
//! Linear-space divide and conquer over the edit graph (Myers, 1986): find the
//! middle snake of a range pair with simultaneous forward and backward
//! frontier sweeps, emit it as kept entries, and recurse on both sides of it.
//! Matching is decided by the comparator's "related" predicate, so elements
//! that merely changed can still be aligned.
//!
//! After the search, two optional passes rewrite the entry list:
//! [`moves`] folds delete/insert pairs of identical elements into moves, and
//! [`nested`] recurses into composite elements.

mod moves;
mod nested;

use crate::comparator::Comparator;
use crate::diff::Diff;
use crate::difference::Difference;
use crate::error::DiffError;
use crate::sequence::Diffable;
use crate::{debug, trace};
use rapidhash::RapidHashMap as HashMap;

/// A run of matched positions on one diagonal.
#[derive(Debug, Clone, Copy)]
struct Snake {
    /// First left position of the run
    start: usize,
    /// One past the last left position of the run
    end: usize,
    /// `left - right` along the run
    diagonal: isize,
}

/// State of one diff invocation.
///
/// The frontier arrays are sized once for the full sequences and reused by
/// every recursive call. Comparison results are cached per index pair.
pub(crate) struct Engine<'a, 'c, T, L: ?Sized, R: ?Sized> {
    left: &'a L,
    right: &'a R,
    comparator: &'c Comparator<'c, T>,
    down: Vec<isize>,
    up: Vec<isize>,
    cache: HashMap<(usize, usize), Difference>,
    results: Vec<Diff<&'a T>>,
}

impl<'a, 'c, T, L, R> Engine<'a, 'c, T, L, R>
where
    T: 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
{
    pub(crate) fn new(left: &'a L, right: &'a R, comparator: &'c Comparator<'c, T>) -> Self {
        let size = left.segment_count() + right.segment_count() + 2;
        Self {
            left,
            right,
            comparator,
            down: vec![0; size],
            up: vec![0; size],
            cache: HashMap::default(),
            results: Vec::new(),
        }
    }

    /// Run the search and the configured passes.
    pub(crate) fn run(mut self) -> Result<Vec<Diff<&'a T>>, DiffError> {
        let left_count = self.left.segment_count();
        let right_count = self.right.segment_count();
        debug!(left_count, right_count, "diff start");

        self.range_diff(0, left_count, 0, right_count)?;
        let mut results = core::mem::take(&mut self.results);
        debug!(entries = results.len(), "edit script done");

        if self.comparator.config.find_moves {
            results = moves::deduce_moves(results, |from, to| self.exact_match(from, to));
        }
        if self.comparator.config.find_nested {
            results = self.aggregate_nested(results)?;
        }

        debug!(
            entries = results.len(),
            comparisons = self.cache.len(),
            "diff done"
        );
        Ok(results)
    }

    fn left_at(&self, index: usize) -> &'a T {
        let left: &'a L = self.left;
        left.segment(index)
    }

    fn right_at(&self, index: usize) -> &'a T {
        let right: &'a R = self.right;
        right.segment(index)
    }

    fn range_diff(
        &mut self,
        start_left: usize,
        end_left: usize,
        start_right: usize,
        end_right: usize,
    ) -> Result<(), DiffError> {
        let snake = self.middle(start_left, end_left, start_right, end_right)?;
        let collapsed = match snake {
            None => true,
            Some(snake) => {
                (snake.start == end_left && snake.diagonal == diagonal(end_left, end_right))
                    || (snake.end == start_left
                        && snake.diagonal == diagonal(start_left, start_right))
            }
        };

        match snake {
            Some(snake) if !collapsed => {
                trace!(
                    start = snake.start,
                    end = snake.end,
                    diagonal = snake.diagonal,
                    "middle snake"
                );
                let shift = |left: usize| (left as isize - snake.diagonal) as usize;

                self.range_diff(start_left, snake.start, start_right, shift(snake.start))?;
                for index in snake.start..snake.end {
                    self.keep(index, shift(index));
                }
                self.range_diff(snake.end, end_left, shift(snake.end), end_right)
            }
            _ => {
                self.merge(start_left, end_left, start_right, end_right);
                Ok(())
            }
        }
    }

    /// Walk both ranges together, keeping matches and spending the longer
    /// remainder first.
    fn merge(&mut self, start_left: usize, end_left: usize, start_right: usize, end_right: usize) {
        let mut left = start_left;
        let mut right = start_right;
        while left < end_left || right < end_right {
            if left < end_left && right < end_right && self.equal_enough(left, right) {
                self.keep(left, right);
                left += 1;
                right += 1;
            } else if end_left - left > end_right - right {
                self.results.push(Diff::Deleted {
                    entry: self.left_at(left),
                    index: left,
                });
                left += 1;
            } else {
                self.results.push(Diff::Inserted {
                    entry: self.right_at(right),
                    index: right,
                });
                right += 1;
            }
        }
    }

    fn keep(&mut self, left: usize, right: usize) {
        self.results.push(Diff::Kept {
            entry: self.right_at(right),
            from_index: left,
            to_index: right,
        });
    }

    /// Find the middle snake of the range pair, or `None` if either range is empty.
    fn middle(
        &mut self,
        start_left: usize,
        end_left: usize,
        start_right: usize,
        end_right: usize,
    ) -> Result<Option<Snake>, DiffError> {
        let left_len = end_left - start_left;
        let right_len = end_right - start_right;
        if left_len == 0 || right_len == 0 {
            return Ok(None);
        }

        let (sl, el) = (start_left as isize, end_left as isize);
        let (sr, er) = (start_right as isize, end_right as isize);
        let delta = left_len as isize - right_len as isize;
        let center = (left_len + right_len).div_ceil(2) as isize;
        let odd = delta % 2 != 0;

        self.down[(center + 1) as usize] = sl;
        self.up[(center + 1) as usize] = el + 1;

        for offset in 0..=center {
            // Forward sweep over diagonals -offset..=offset.
            let mut pos = -offset;
            while pos <= offset {
                let index = (pos + center) as usize;
                if pos == -offset || (pos != offset && self.down[index - 1] < self.down[index + 1])
                {
                    self.down[index] = self.down[index + 1];
                } else {
                    self.down[index] = self.down[index - 1] + 1;
                }

                let mut pos_left = self.down[index];
                let mut pos_right = pos_left - sl + sr - pos;
                while pos_left < el
                    && pos_right >= sr
                    && pos_right < er
                    && self.equal_enough(pos_left as usize, pos_right as usize)
                {
                    pos_left += 1;
                    pos_right += 1;
                    self.down[index] = pos_left;
                }

                if odd
                    && delta - offset <= pos
                    && pos <= delta + offset
                    && self.up[(index as isize - delta) as usize] <= self.down[index]
                {
                    let start = self.up[(index as isize - delta) as usize] as usize;
                    return Ok(Some(self.slice(start, pos + sl - sr, end_left, end_right)));
                }

                pos += 2;
            }

            // Backward sweep over diagonals delta-offset..=delta+offset.
            let mut pos = delta - offset;
            while pos <= delta + offset {
                let index = (pos + center - delta) as usize;
                if pos == delta - offset
                    || (pos != delta + offset && self.up[index + 1] <= self.up[index - 1])
                {
                    self.up[index] = self.up[index + 1] - 1;
                } else {
                    self.up[index] = self.up[index - 1];
                }

                let mut pos_left = self.up[index] - 1;
                let mut pos_right = pos_left - sl + sr - pos;
                while pos_left >= sl
                    && pos_right >= sr
                    && pos_left < el
                    && pos_right < er
                    && self.equal_enough(pos_left as usize, pos_right as usize)
                {
                    self.up[index] = pos_left;
                    pos_left -= 1;
                    pos_right -= 1;
                }

                if !odd
                    && -offset <= pos
                    && pos <= offset
                    && self.up[index] <= self.down[(index as isize + delta) as usize]
                {
                    let start = self.up[index] as usize;
                    return Ok(Some(self.slice(start, pos + sl - sr, end_left, end_right)));
                }

                pos += 2;
            }
        }

        Err(DiffError::MiddleSnakeNotFound {
            start_left,
            end_left,
            start_right,
            end_right,
        })
    }

    /// Extend a snake starting at `start` along `diagonal` as far as it matches.
    fn slice(&mut self, start: usize, diagonal: isize, end_left: usize, end_right: usize) -> Snake {
        let mut end = start;
        loop {
            let right = end as isize - diagonal;
            if end >= end_left
                || right < 0
                || right as usize >= end_right
                || !self.equal_enough(end, right as usize)
            {
                break;
            }
            end += 1;
        }
        Snake {
            start,
            end,
            diagonal,
        }
    }

    fn equal_enough(&mut self, left: usize, right: usize) -> bool {
        self.difference(left, right).is_related()
    }

    fn exact_match(&mut self, left: usize, right: usize) -> bool {
        self.difference(left, right).is_identical()
    }

    /// Cached comparison of `left[left_index]` and `right[right_index]`.
    fn difference(&mut self, left_index: usize, right_index: usize) -> Difference {
        if let Some(&difference) = self.cache.get(&(left_index, right_index)) {
            return difference;
        }
        let difference = self
            .comparator
            .compare(self.left_at(left_index), self.right_at(right_index));
        self.cache.insert((left_index, right_index), difference);
        difference
    }
}

fn diagonal(left: usize, right: usize) -> isize {
    left as isize - right as isize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfig;

    fn by_eq(a: &char, b: &char) -> Difference {
        if a == b {
            Difference::Nothing
        } else {
            Difference::Entire
        }
    }

    fn script(left: &str, right: &str) -> Vec<Diff<char>> {
        let left: Vec<char> = left.chars().collect();
        let right: Vec<char> = right.chars().collect();
        let comparator = Comparator::new(
            DiffConfig::<char>::new().find_moves(false),
            Some(&by_eq),
            None,
        );
        Engine::new(&left, &right, &comparator)
            .run()
            .unwrap()
            .iter()
            .map(Diff::cloned)
            .collect()
    }

    #[test]
    fn identical_sequences_are_all_kept() {
        let diffs = script("abc", "abc");
        assert_eq!(
            diffs,
            vec![
                Diff::Kept {
                    entry: 'a',
                    from_index: 0,
                    to_index: 0
                },
                Diff::Kept {
                    entry: 'b',
                    from_index: 1,
                    to_index: 1
                },
                Diff::Kept {
                    entry: 'c',
                    from_index: 2,
                    to_index: 2
                },
            ]
        );
    }

    #[test]
    fn empty_sides_fall_back_to_merge() {
        assert!(script("", "").is_empty());
        assert_eq!(
            script("", "ab"),
            vec![
                Diff::Inserted {
                    entry: 'a',
                    index: 0
                },
                Diff::Inserted {
                    entry: 'b',
                    index: 1
                },
            ]
        );
        assert_eq!(
            script("ab", ""),
            vec![
                Diff::Deleted {
                    entry: 'a',
                    index: 0
                },
                Diff::Deleted {
                    entry: 'b',
                    index: 1
                },
            ]
        );
    }

    #[test]
    fn replacement_inserts_before_deleting() {
        assert_eq!(
            script("abcdef", "abXdef"),
            vec![
                Diff::Kept {
                    entry: 'a',
                    from_index: 0,
                    to_index: 0
                },
                Diff::Kept {
                    entry: 'b',
                    from_index: 1,
                    to_index: 1
                },
                Diff::Inserted {
                    entry: 'X',
                    index: 2
                },
                Diff::Deleted {
                    entry: 'c',
                    index: 2
                },
                Diff::Kept {
                    entry: 'd',
                    from_index: 3,
                    to_index: 3
                },
                Diff::Kept {
                    entry: 'e',
                    from_index: 4,
                    to_index: 4
                },
                Diff::Kept {
                    entry: 'f',
                    from_index: 5,
                    to_index: 5
                },
            ]
        );
    }

    #[test]
    fn rotation_without_moves_is_delete_and_insert() {
        assert_eq!(
            script("abcd", "dabc"),
            vec![
                Diff::Inserted {
                    entry: 'd',
                    index: 0
                },
                Diff::Kept {
                    entry: 'a',
                    from_index: 0,
                    to_index: 1
                },
                Diff::Kept {
                    entry: 'b',
                    from_index: 1,
                    to_index: 2
                },
                Diff::Kept {
                    entry: 'c',
                    from_index: 2,
                    to_index: 3
                },
                Diff::Deleted {
                    entry: 'd',
                    index: 3
                },
            ]
        );
    }

    #[test]
    fn comparisons_are_cached_per_pair() {
        use core::cell::Cell;

        let calls = Cell::new(0usize);
        let counting = |a: &u8, b: &u8| {
            calls.set(calls.get() + 1);
            if a == b {
                Difference::Nothing
            } else {
                Difference::Entire
            }
        };
        let left = [1u8, 2, 3, 4, 5, 6];
        let right = [6u8, 5, 4, 3, 2, 1];
        let comparator = Comparator::new(DiffConfig::<u8>::new(), Some(&counting), None);
        let mut engine = Engine::new(&left, &right, &comparator);
        engine.range_diff(0, left.len(), 0, right.len()).unwrap();

        assert!(calls.get() <= left.len() * right.len());
        assert_eq!(calls.get(), engine.cache.len());
    }
}
