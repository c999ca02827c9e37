use std::fmt::Debug;
use std::io;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::windows::MockBindings;
use crate::pal::windows::{Bindings, BuildTargetBindings};

#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Real(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BuildTargetBindings)
    }
}

impl Bindings for BindingsFacade {
    fn query_performance_counter(&self) -> io::Result<i64> {
        match self {
            Self::Real(bindings) => bindings.query_performance_counter(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.query_performance_counter(),
        }
    }

    fn query_performance_frequency(&self) -> io::Result<i64> {
        match self {
            Self::Real(bindings) => bindings.query_performance_frequency(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.query_performance_frequency(),
        }
    }
}

impl From<&'static BuildTargetBindings> for BindingsFacade {
    fn from(bindings: &'static BuildTargetBindings) -> Self {
        Self::Real(bindings)
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}

impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(bindings) => bindings.fmt(f),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.fmt(f),
        }
    }
}
