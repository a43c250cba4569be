#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fail-fast outcome of evaluating a rule or a specification.
///
/// `Either<F, P>` holds exactly one of two variants: `Fail` carries a
/// joinable error value, `Pass` carries the (possibly unchanged) validated
/// value. Unlike an accumulating validation type, `Either` represents a
/// single first failure; the engine stops at the entry that produced it.
///
/// # Serde Support
///
/// `Either` implements `Serialize` and `Deserialize` when `F` and `P` do.
///
/// # Type Parameters
///
/// * `F` - The failure type
/// * `P` - The passing value type
///
/// # Examples
///
/// ```
/// use spec_rail::Either;
///
/// let pass = Either::<&str, i32>::pass(42);
/// assert!(pass.is_pass());
///
/// let fail = Either::<&str, i32>::fail("error");
/// assert!(fail.is_fail());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Either<F, P> {
    Fail(F),
    Pass(P),
}

impl<F, P> Either<F, P> {
    /// Creates a failing outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::fail("missing field");
    /// assert!(outcome.is_fail());
    /// ```
    #[must_use]
    #[inline]
    pub fn fail(failure: F) -> Self {
        Self::Fail(failure)
    }

    /// Creates a passing outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::pass(42);
    /// assert_eq!(outcome.into_pass(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn pass(value: P) -> Self {
        Self::Pass(value)
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Returns `true` if the outcome passed.
    #[must_use]
    #[inline]
    pub fn is_pass(&self) -> bool {
        !self.is_fail()
    }

    /// Maps the passing value using the provided function.
    ///
    /// A failure is preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::pass(21);
    /// assert_eq!(outcome.map(|x| x * 2).into_pass(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<Q, Op>(self, op: Op) -> Either<F, Q>
    where
        Op: FnOnce(P) -> Q,
    {
        match self {
            Self::Fail(failure) => Either::Fail(failure),
            Self::Pass(value) => Either::Pass(op(value)),
        }
    }

    /// Maps the failure value while preserving the passing branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::fail("error");
    /// let mapped = outcome.map_fail(|e| format!("rule {}", e));
    /// assert_eq!(mapped.into_fail(), Some("rule error".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_fail<G, Op>(self, op: Op) -> Either<G, P>
    where
        Op: FnOnce(F) -> G,
    {
        match self {
            Self::Fail(failure) => Either::Fail(op(failure)),
            Self::Pass(value) => Either::Pass(value),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// Behaves like [`Result::and_then`]: `op` runs only on a passing
    /// outcome, a failure propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// fn even(input: i32) -> Either<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Either::pass(input)
    ///     } else {
    ///         Either::fail("not even")
    ///     }
    /// }
    ///
    /// assert!(Either::<&str, i32>::pass(4).and_then(even).is_pass());
    /// assert!(Either::<&str, i32>::pass(3).and_then(even).is_fail());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<Q, Op>(self, op: Op) -> Either<F, Q>
    where
        Op: FnOnce(P) -> Either<F, Q>,
    {
        match self {
            Self::Fail(failure) => Either::Fail(failure),
            Self::Pass(value) => op(value),
        }
    }

    /// Calls `op` on a failure, otherwise returns the passing outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::fail("error");
    /// let recovered = outcome.or_else(|_| Either::pass(0));
    /// assert_eq!(recovered.into_pass(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<Op>(self, op: Op) -> Either<F, P>
    where
        Op: FnOnce(F) -> Either<F, P>,
    {
        match self {
            Self::Fail(failure) => op(failure),
            Self::Pass(value) => Either::Pass(value),
        }
    }

    /// Borrows both branches, producing an `Either` of references.
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Either<&F, &P> {
        match self {
            Self::Fail(failure) => Either::Fail(failure),
            Self::Pass(value) => Either::Pass(value),
        }
    }

    /// Extracts the failure, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::fail("error");
    /// assert_eq!(outcome.into_fail(), Some("error"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_fail(self) -> Option<F> {
        match self {
            Self::Fail(failure) => Some(failure),
            Self::Pass(_) => None,
        }
    }

    /// Extracts the passing value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let outcome = Either::<&str, i32>::pass(42);
    /// assert_eq!(outcome.into_pass(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_pass(self) -> Option<P> {
        match self {
            Self::Fail(_) => None,
            Self::Pass(value) => Some(value),
        }
    }

    /// Converts into a `Result`, mapping `Pass` to `Ok` and `Fail` to `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::pass(42).to_result(), Ok(42));
    /// assert_eq!(Either::<&str, i32>::fail("error").to_result(), Err("error"));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<P, F> {
        match self {
            Self::Fail(failure) => Err(failure),
            Self::Pass(value) => Ok(value),
        }
    }

    /// Wraps a `Result` into an `Either`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::Either;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert!(Either::from_result(result).is_pass());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<P, F>) -> Self {
        match result {
            Ok(value) => Self::Pass(value),
            Err(failure) => Self::Fail(failure),
        }
    }
}
