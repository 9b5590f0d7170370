//! Clauses: grammar elements that run for their effect on a target value.
//!
//! A clause either succeeds, possibly consuming input and writing into the
//! target through its bindings, or fails having restored both the cursor and
//! the target to their entry state. That restore contract is what makes
//! speculative constructs (`alternatives`, `maybe`, `repeat`, the lookaheads)
//! composable without observable partial writes.

use crate::parser::error::{ErrorKind, Expected, ParseError};
use crate::parser::input::Cursor;
use crate::parser::producer::Producer;

/// Unbounded repetition count for [`repeat`].
pub const N: usize = usize::MAX;

/// A grammar element applied against a target under construction.
pub trait Clause<T> {
    /// Run the clause. Implementations must leave `input` and `target`
    /// untouched when returning an error.
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError>;
}

/// Any producer can stand in clause position; its value is discarded.
impl<T, P> Clause<T> for P
where
    P: Producer,
{
    fn apply(&self, input: &mut Cursor<'_>, _target: &mut T) -> Result<(), ParseError> {
        self.produce(input)?;
        Ok(())
    }
}

// Tuples of clauses run as a sequence with all-or-nothing effect: a failure
// mid-tuple rewinds the cursor and restores the target snapshot.
macro_rules! impl_clause_for_tuple {
    ( $( $clause:ident => $index:tt ),+ ) => {
        impl<Target, $( $clause ),+> Clause<Target> for ( $( $clause, )+ )
        where
            Target: Clone,
            $( $clause: Clause<Target>, )+
        {
            fn apply(
                &self,
                input: &mut Cursor<'_>,
                target: &mut Target,
            ) -> Result<(), ParseError> {
                let entry = input.mark();
                let saved = target.clone();
                let outcome = (|| -> Result<(), ParseError> {
                    $( self.$index.apply(input, target)?; )+
                    Ok(())
                })();
                if outcome.is_err() {
                    input.rewind(entry);
                    *target = saved;
                }
                outcome
            }
        }
    };
}

impl_clause_for_tuple!(C0 => 0);
impl_clause_for_tuple!(C0 => 0, C1 => 1);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6);
impl_clause_for_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10, C11 => 11
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10, C11 => 11, C12 => 12
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10, C11 => 11, C12 => 12, C13 => 13
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10, C11 => 11, C12 => 12, C13 => 13, C14 => 14
);
impl_clause_for_tuple!(
    C0 => 0, C1 => 1, C2 => 2, C3 => 3, C4 => 4, C5 => 5, C6 => 6, C7 => 7, C8 => 8, C9 => 9,
    C10 => 10, C11 => 11, C12 => 12, C13 => 13, C14 => 14, C15 => 15
);

/// An ordered list of branches for [`alternatives`].
pub trait BranchList<T> {
    fn try_branches(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError>;
}

macro_rules! impl_branch_list_for_tuple {
    ( $( $branch:ident => $index:tt ),+ ) => {
        impl<Target, $( $branch ),+> BranchList<Target> for ( $( $branch, )+ )
        where
            $( $branch: Clause<Target>, )+
        {
            fn try_branches(
                &self,
                input: &mut Cursor<'_>,
                target: &mut Target,
            ) -> Result<(), ParseError> {
                let mut furthest = input.position();
                $(
                    match self.$index.apply(input, target) {
                        Ok(()) => return Ok(()),
                        Err(error) => furthest = furthest.max(error.position),
                    }
                )+
                Err(ParseError::new(furthest, ErrorKind::NoAlternative))
            }
        }
    };
}

impl_branch_list_for_tuple!(B0 => 0);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1, B2 => 2);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1, B2 => 2, B3 => 3);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1, B2 => 2, B3 => 3, B4 => 4);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1, B2 => 2, B3 => 3, B4 => 4, B5 => 5);
impl_branch_list_for_tuple!(B0 => 0, B1 => 1, B2 => 2, B3 => 3, B4 => 4, B5 => 5, B6 => 6);
impl_branch_list_for_tuple!(
    B0 => 0, B1 => 1, B2 => 2, B3 => 3, B4 => 4, B5 => 5, B6 => 6, B7 => 7
);

/// See [`sequence`].
#[derive(Clone)]
pub struct Sequence<C> {
    clauses: C,
}

/// Run `clauses` in order; the first failure fails the whole sequence and
/// restores cursor and target.
pub fn sequence<C>(clauses: C) -> Sequence<C> {
    Sequence { clauses }
}

impl<T, C> Clause<T> for Sequence<C>
where
    C: Clause<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        self.clauses.apply(input, target)
    }
}

/// See [`alternatives`].
#[derive(Clone)]
pub struct Alternatives<B> {
    branches: B,
}

/// Try `branches` in order and commit the first that succeeds. A failed
/// branch leaves no trace on the cursor or the target. When every branch
/// fails, the error points at the furthest position any branch reached.
pub fn alternatives<B>(branches: B) -> Alternatives<B> {
    Alternatives { branches }
}

impl<T, B> Clause<T> for Alternatives<B>
where
    B: BranchList<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        self.branches.try_branches(input, target)
    }
}

/// See [`maybe`].
#[derive(Clone)]
pub struct Maybe<C> {
    clauses: C,
}

/// Run `clauses` as a sequence; a failure becomes success-with-no-effect.
pub fn maybe<C>(clauses: C) -> Maybe<C> {
    Maybe { clauses }
}

impl<T, C> Clause<T> for Maybe<C>
where
    C: Clause<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        // The inner clause restores everything on failure, so a miss is free.
        let _ = self.clauses.apply(input, target);
        Ok(())
    }
}

/// See [`repeat`] and [`strict_repeat`].
#[derive(Clone)]
pub struct Repeat<C> {
    min: usize,
    max: usize,
    strict: bool,
    clauses: C,
}

/// Greedily apply `clauses` as a sequence between `min` and `max` times
/// (inclusive; pass [`N`] for no upper bound). Iterations beyond `max` are
/// left unconsumed. Every successful iteration must advance the cursor.
pub fn repeat<C>(min: usize, max: usize, clauses: C) -> Repeat<C> {
    Repeat { min, max, strict: false, clauses }
}

/// As [`repeat`], but fails with [`ErrorKind::RepeatAboveMax`] when one more
/// iteration would still match after `max` has been reached.
pub fn strict_repeat<C>(min: usize, max: usize, clauses: C) -> Repeat<C> {
    Repeat { min, max, strict: true, clauses }
}

impl<T, C> Clause<T> for Repeat<C>
where
    T: Clone,
    C: Clause<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        let entry = input.mark();
        let saved = target.clone();

        let mut count = 0usize;
        let mut last_error = None;
        while count < self.max {
            let before = input.position();
            match self.clauses.apply(input, target) {
                Ok(()) => {
                    if input.position() == before {
                        input.rewind(entry);
                        target.clone_from(&saved);
                        return Err(ParseError::new(before, ErrorKind::ZeroLengthIteration));
                    }
                    count += 1;
                }
                Err(error) => {
                    last_error = Some(error);
                    break;
                }
            }
        }

        if count < self.min {
            input.rewind(entry);
            target.clone_from(&saved);
            let position = last_error.map_or(input.position(), |error| error.position);
            return Err(ParseError::new(
                position,
                ErrorKind::RepeatBelowMin { min: self.min, actual: count },
            ));
        }

        if self.strict && count == self.max {
            let mark = input.mark();
            let mut scratch = target.clone();
            let extra = self.clauses.apply(input, &mut scratch).is_ok();
            input.rewind(mark);
            if extra {
                let position = input.position();
                input.rewind(entry);
                target.clone_from(&saved);
                return Err(ParseError::new(
                    position,
                    ErrorKind::RepeatAboveMax { max: self.max },
                ));
            }
        }

        Ok(())
    }
}

/// See [`not_clause`].
#[derive(Clone)]
pub struct NotClause<C> {
    clauses: C,
}

/// Negative lookahead: succeeds when the inner sequence does not match here.
/// The cursor is rewound in both cases and no bindings are applied.
pub fn not_clause<C>(clauses: C) -> NotClause<C> {
    NotClause { clauses }
}

impl<T, C> Clause<T> for NotClause<C>
where
    T: Clone,
    C: Clause<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        let entry = input.mark();
        let mut scratch = target.clone();
        let matched = self.clauses.apply(input, &mut scratch).is_ok();
        input.rewind(entry);
        if matched {
            Err(match input.peek() {
                Some(actual) => ParseError::new(
                    input.position(),
                    ErrorKind::Unexpected { actual, expected: Expected::NoLookaheadMatch },
                ),
                None => ParseError::new(
                    input.position(),
                    ErrorKind::UnexpectedEof { expected: Expected::NoLookaheadMatch },
                ),
            })
        } else {
            Ok(())
        }
    }
}

/// See [`and_clause`].
#[derive(Clone)]
pub struct AndClause<C> {
    clauses: C,
}

/// Positive lookahead: succeeds when the inner sequence matches here. The
/// cursor is rewound in both cases and no bindings are applied.
pub fn and_clause<C>(clauses: C) -> AndClause<C> {
    AndClause { clauses }
}

impl<T, C> Clause<T> for AndClause<C>
where
    T: Clone,
    C: Clause<T>,
{
    fn apply(&self, input: &mut Cursor<'_>, target: &mut T) -> Result<(), ParseError> {
        let entry = input.mark();
        let mut scratch = target.clone();
        let outcome = self.clauses.apply(input, &mut scratch);
        input.rewind(entry);
        outcome
    }
}
