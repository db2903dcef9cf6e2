use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based offset pagination over mirrored names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,

    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// A page of template names from the local mirror. Unrelated to the
/// provider's cursor paging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamePage {
    pub names: Vec<String>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
    pub has_next: bool,
}

impl NamePage {
    pub fn new(names: Vec<String>, total: u64, request: PageRequest) -> Self {
        let size = request.size.max(1) as u64;
        let total_pages = total.div_ceil(size);
        let has_next = request.offset() + size < total;

        Self {
            names,
            total,
            page: request.page,
            size: request.size,
            total_pages,
            has_next,
        }
    }
}
