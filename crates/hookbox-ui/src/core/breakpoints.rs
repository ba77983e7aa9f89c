//! Responsive breakpoint definitions.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name (`xs`, `sm`, ...).
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u32,
    /// Inclusive upper bound, `None` for the widest breakpoint.
    pub max_width: Option<u32>,
}

/// Phones, below 576px.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(575),
};
/// Large phones, 576px to 767px.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 576,
    max_width: Some(767),
};
/// Tablets, 768px to 991px.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(991),
};
/// Laptops, 992px to 1199px.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 992,
    max_width: Some(1199),
};
/// Desktops, 1200px and up.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1200,
    max_width: None,
};

/// Ordered breakpoints, narrowest first.
pub const BREAKPOINTS: [Breakpoint; 5] = [XS, SM, MD, LG, XL];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XL)
}

/// One-hot view of the active breakpoint, as returned by `use_breakpoint`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct BreakpointFlags {
    /// Width below 576px.
    pub is_xs: bool,
    /// Width in `576..768`.
    pub is_sm: bool,
    /// Width in `768..992`.
    pub is_md: bool,
    /// Width in `992..1200`.
    pub is_lg: bool,
    /// Width of 1200px or more.
    pub is_xl: bool,
}

impl BreakpointFlags {
    /// Flags for a window of `width` pixels.
    #[must_use]
    pub fn for_width(width: u32) -> Self {
        Self::from(for_width(width))
    }

    /// Name of the active breakpoint.
    #[must_use]
    pub const fn name(self) -> &'static str {
        if self.is_xs {
            XS.name
        } else if self.is_sm {
            SM.name
        } else if self.is_md {
            MD.name
        } else if self.is_lg {
            LG.name
        } else {
            XL.name
        }
    }
}

impl From<Breakpoint> for BreakpointFlags {
    fn from(bp: Breakpoint) -> Self {
        Self {
            is_xs: bp == XS,
            is_sm: bp == SM,
            is_md: bp == MD,
            is_lg: bp == LG,
            is_xl: bp == XL,
        }
    }
}
