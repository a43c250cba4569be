use crate::outcome::Either;

pub struct Iter<'a, P> {
    inner: Option<&'a P>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, P> {
    inner: Option<&'a mut P>,
}

impl<'a, P> Iterator for IterMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<P> {
    inner: Option<P>,
}

impl<P> Iterator for IntoIter<P> {
    type Item = P;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<F, P> Either<F, P> {
    /// Iterates over the passing value, if any (zero or one items).
    pub fn iter(&self) -> Iter<'_, P> {
        match self {
            Either::Pass(value) => Iter { inner: Some(value) },
            Either::Fail(_) => Iter { inner: None },
        }
    }

    /// Mutably iterates over the passing value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, P> {
        match self {
            Either::Pass(value) => IterMut { inner: Some(value) },
            Either::Fail(_) => IterMut { inner: None },
        }
    }
}

impl<F, P> IntoIterator for Either<F, P> {
    type Item = P;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Either::Pass(value) => IntoIter { inner: Some(value) },
            Either::Fail(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, F, P> IntoIterator for &'a Either<F, P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, F, P> IntoIterator for &'a mut Either<F, P> {
    type Item = &'a mut P;
    type IntoIter = IterMut<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
