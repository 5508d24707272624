//! Signed-term vector expressions such as `king − man + woman`.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::SpaceError;
use crate::store::EntityKey;

/// The sign of a [`Term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+1`
    Plus,
    /// `−1`
    Minus,
}

impl Sign {
    /// `+1` or `−1`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }
}

impl TryFrom<i32> for Sign {
    type Error = SpaceError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Plus),
            -1 => Ok(Self::Minus),
            other => Err(SpaceError::InvalidSign(other)),
        }
    }
}

/// One signed entity reference: `+id` or `−id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term<T> {
    id: T,
    sign: Sign,
}

impl<T> Term<T> {
    /// Creates a term from a numeric sign.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidSign`] unless `sign` is `1` or `-1`.
    pub fn new(id: T, sign: i32) -> Result<Self, SpaceError> {
        Ok(Self { id, sign: Sign::try_from(sign)? })
    }

    /// `+id`
    #[must_use]
    pub const fn plus(id: T) -> Self {
        Self { id, sign: Sign::Plus }
    }

    /// `−id`
    #[must_use]
    pub const fn minus(id: T) -> Self {
        Self { id, sign: Sign::Minus }
    }

    /// The referenced entity.
    #[must_use]
    pub const fn id(&self) -> &T {
        &self.id
    }

    /// The sign.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }
}

/// A non-empty, ordered sequence of [`Term`]s.
///
/// Order is significant: evaluation accumulates left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorExpression<T> {
    terms: Vec<Term<T>>,
}

impl<T: EntityKey> VectorExpression<T> {
    /// Creates an expression.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyExpression`] if `terms` is empty.
    pub fn new(terms: Vec<Term<T>>) -> Result<Self, SpaceError> {
        if terms.is_empty() {
            return Err(SpaceError::EmptyExpression);
        }
        Ok(Self { terms })
    }

    /// Starts an expression builder.
    #[must_use]
    pub fn builder() -> VectorExpressionBuilder<T> {
        VectorExpressionBuilder { terms: Vec::new() }
    }

    /// The terms, in evaluation order.
    #[must_use]
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    /// Every distinct id the expression references.
    #[must_use]
    pub fn ids(&self) -> BTreeSet<T> {
        self.terms.iter().map(|t| t.id.clone()).collect()
    }
}

impl<T: fmt::Display> fmt::Display for VectorExpression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.sign) {
                (0, Sign::Plus) => write!(f, "{}", term.id)?,
                (0, Sign::Minus) => write!(f, "-{}", term.id)?,
                (_, Sign::Plus) => write!(f, " + {}", term.id)?,
                (_, Sign::Minus) => write!(f, " - {}", term.id)?,
            }
        }
        Ok(())
    }
}

/// Fluent construction of a [`VectorExpression`].
///
/// ```
/// use latentlens_space::lab::VectorExpression;
///
/// let expr = VectorExpression::builder().plus("king").minus("man").plus("woman").build()?;
/// assert_eq!(expr.to_string(), "king - man + woman");
/// # Ok::<(), latentlens_space::SpaceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VectorExpressionBuilder<T> {
    terms: Vec<Term<T>>,
}

impl<T: EntityKey> VectorExpressionBuilder<T> {
    /// Appends `+id`.
    #[must_use]
    pub fn plus(mut self, id: T) -> Self {
        self.terms.push(Term::plus(id));
        self
    }

    /// Appends `−id`.
    #[must_use]
    pub fn minus(mut self, id: T) -> Self {
        self.terms.push(Term::minus(id));
        self
    }

    /// Finishes the expression.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyExpression`] if no term was added.
    pub fn build(self) -> Result<VectorExpression<T>, SpaceError> {
        VectorExpression::new(self.terms)
    }
}
