use std::fmt::{Debug, Display};

/// An edge is defined by two endpoints and the property stored with it.
/// Whether the edge is directed depends on the graph it was listed from.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<Id, P = ()>(pub Id, pub Id, pub P);

impl<Id, P> Display for Edge<Id, P>
where
    Id: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<Id, P> Debug for Edge<Id, P>
where
    Id: Debug,
    P: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})[{:?}]", self.0, self.1, self.2)
    }
}

impl<Id, P> Edge<Id, P> {
    /// Returns the tail of the edge
    pub fn tail(&self) -> &Id {
        &self.0
    }

    /// Returns the head of the edge
    pub fn head(&self) -> &Id {
        &self.1
    }

    /// Returns the property stored with the edge
    pub fn prop(&self) -> &P {
        &self.2
    }

    /// Returns both endpoints as a tuple of references
    pub fn endpoints(&self) -> (&Id, &Id) {
        (&self.0, &self.1)
    }

    /// Drops the property
    pub fn into_endpoints(self) -> (Id, Id) {
        (self.0, self.1)
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        Edge(self.1, self.0, self.2)
    }
}

impl<Id: Ord, P> Edge<Id, P> {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            self
        } else {
            self.reverse()
        }
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<Id, P> From<(Id, Id, P)> for Edge<Id, P> {
    fn from(value: (Id, Id, P)) -> Self {
        Edge(value.0, value.1, value.2)
    }
}

impl<Id> From<(Id, Id)> for Edge<Id, ()> {
    fn from(value: (Id, Id)) -> Self {
        Edge(value.0, value.1, ())
    }
}

impl<Id, P> From<Edge<Id, P>> for (Id, Id, P) {
    fn from(value: Edge<Id, P>) -> Self {
        (value.0, value.1, value.2)
    }
}
