/// Below this width the paginator switches to its compact layout.
pub const SMALL_BREAKPOINT_PX: u32 = 522;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Sm,
    Md,
}

impl Density {
    pub fn for_width(width_px: u32) -> Self {
        if width_px < SMALL_BREAKPOINT_PX { Density::Sm } else { Density::Md }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Density::Sm => "sm",
            Density::Md => "md",
        }
    }
}
