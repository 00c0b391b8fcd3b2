use nutype::nutype;

/// A validated pagination window. Out-of-range values are unrepresentable:
/// `page` is 1-based and `size` is capped, so computing an offset cannot
/// underflow and a single page cannot exceed [`PageSize::MAX`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: PageNumber,
    pub size: PageSize,
}

impl PageRequest {
    pub fn offset(self) -> u64 {
        (*self.page - 1) * *self.size
    }

    pub fn limit(self) -> u64 {
        *self.size
    }
}

#[nutype(
    validate(greater_or_equal = 1),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: u64 = 1;
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::try_new(Self::FIRST).unwrap()
    }
}

#[nutype(
    validate(greater_or_equal = PageSize::MIN, less_or_equal = PageSize::MAX),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PageSize(u64);

impl PageSize {
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 100;
    pub const DEFAULT: u64 = 20;
}

impl Default for PageSize {
    fn default() -> Self {
        Self::try_new(Self::DEFAULT).unwrap()
    }
}
