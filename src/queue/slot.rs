use std::mem::replace;

#[derive(Debug)]
pub(crate) enum Slot<T> {
    Occupied(T),
    Vacant,
}

impl<T> Slot<T> {
    /// Write a value into the slot, dropping whatever was left there.
    pub(crate) fn put(&mut self, value: T) {
        *self = Slot::Occupied(value);
    }

    pub(crate) fn take(&mut self) -> Option<T> {
        match replace(self, Slot::Vacant) {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_occupied(&self) -> bool {
        match self {
            Slot::Occupied(_) => true,
            Slot::Vacant => false,
        }
    }
}
