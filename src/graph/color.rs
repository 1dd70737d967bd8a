use crate::library::NodeKind;
use crate::types::ArgType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Canonical color of a pin type. Links take the color of their start pin.
pub fn pin_color(arg_type: ArgType) -> Rgb {
    match arg_type {
        ArgType::None => Rgb::WHITE,
        ArgType::Bool => Rgb::new(220, 130, 130),
        ArgType::Int => Rgb::new(130, 220, 230),
        ArgType::Float => Rgb::new(150, 230, 150),
        ArgType::Float2 => Rgb::new(170, 200, 140),
        ArgType::Float3 => Rgb::new(240, 220, 130),
        ArgType::Float4 => Rgb::new(240, 180, 130),
        ArgType::Matrix4x4 => Rgb::new(180, 160, 240),
        ArgType::String => Rgb::new(240, 150, 220),
        ArgType::ResourceIndex => Rgb::new(200, 200, 200),
    }
}

/// Header color of a node.
pub fn node_color(kind: NodeKind) -> Rgb {
    match kind {
        NodeKind::Event => Rgb::new(220, 48, 48),
        NodeKind::Function => Rgb::new(68, 201, 156),
        NodeKind::Workflow => Rgb::new(124, 21, 153),
        NodeKind::Plain => Rgb::new(147, 226, 74),
    }
}
