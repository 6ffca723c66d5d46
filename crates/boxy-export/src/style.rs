//! Stroke styles for cut and fold lines

use boxy_core::Role;

/// How one line role is drawn. Widths and dashes are in pattern units (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    pub color: [u8; 3],
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

pub const CUT_STYLE: RoleStyle = RoleStyle {
    color: [0x1f, 0x29, 0x37],
    width: 1.5,
    dash: None,
};

pub const FOLD_STYLE: RoleStyle = RoleStyle {
    color: [0x3b, 0x82, 0xf6],
    width: 1.0,
    dash: Some([8.0, 4.0]),
};

impl RoleStyle {
    pub fn for_role(role: Role) -> &'static RoleStyle {
        match role {
            Role::Cut => &CUT_STYLE,
            Role::Fold => &FOLD_STYLE,
        }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(RoleStyle::for_role(Role::Cut).hex(), "#1f2937");
        assert_eq!(RoleStyle::for_role(Role::Fold).hex(), "#3b82f6");
    }
}
