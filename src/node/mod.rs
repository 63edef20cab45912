//! Host pipeline adapter.
//!
//! Translates between the node-graph host's parameter format (widget values, labels,
//! dynamically shaped tensors) and the typed core. Nothing here is needed to use the
//! library directly; see [`crate::api`] for that.
//!
//! The adapter publishes a [`NodeSchema`] describing its inputs, a registration table
//! ([`node_registrations`]), and an always-dirty change marker ([`HostNode::is_changed`]).
use ndarray::{ArrayD, Ix4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::resize_to_aspect;
use crate::core::params::{MAX_DIMENSION, MIN_DIMENSION, ResizeParams};
use crate::error::{Error, Result};
use crate::types::{AlignMode, InterpolationKernel};

pub const NODE_CLASS_NAME: &str = "ResizeToCustomAspectRatio";
pub const NODE_DISPLAY_NAME: &str = "Resize to Custom Aspect Ratio";
pub const NODE_CATEGORY: &str = "image/transform";
pub const NODE_FUNCTION: &str = "resize_by_aspect";

/// Kind and widget settings of one node input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InputKind {
    Image,
    Int {
        default: i64,
        min: i64,
        max: i64,
        step: i64,
        display: String,
    },
    Choice {
        options: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: InputKind,
}

/// Everything the host needs to render and wire the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSchema {
    pub category: String,
    pub function: String,
    pub required: Vec<InputSpec>,
    pub return_types: Vec<String>,
    pub return_names: Vec<String>,
}

/// Widget values as the host sends them. Integers arrive unchecked and enums as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetValues {
    pub original_width: i64,
    pub original_height: i64,
    pub target_resolution: i64,
    pub align_mode: String,
    pub interpolation: String,
}

impl Default for WidgetValues {
    fn default() -> Self {
        let params = ResizeParams::default();
        Self {
            original_width: params.original_width as i64,
            original_height: params.original_height as i64,
            target_resolution: params.target_resolution as i64,
            align_mode: params.align_mode.label().to_string(),
            interpolation: params.interpolation.name().to_string(),
        }
    }
}

impl WidgetValues {
    /// Parse labels and bounds-check integers into typed parameters.
    pub fn to_params(&self) -> Result<ResizeParams> {
        Ok(ResizeParams {
            original_width: widget_dimension("original_width", self.original_width)?,
            original_height: widget_dimension("original_height", self.original_height)?,
            target_resolution: widget_dimension("target_resolution", self.target_resolution)?,
            align_mode: self.align_mode.parse()?,
            interpolation: self.interpolation.parse()?,
        })
    }
}

fn widget_dimension(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidDimension { name, value });
    }
    if value > MAX_DIMENSION as i64 {
        return Err(Error::OutOfRange {
            name,
            value,
            min: MIN_DIMENSION as i64,
            max: MAX_DIMENSION as i64,
        });
    }
    Ok(value as usize)
}

/// A node the host can instantiate and execute.
pub trait HostNode: Send + Sync {
    fn schema(&self) -> NodeSchema;

    /// Run the node on a (batch, height, width, channel) tensor.
    fn execute(&self, image: &ArrayD<f32>, widgets: &WidgetValues) -> Result<ArrayD<f32>>;

    /// Change marker for the host's execution cache. NaN never equals itself, so the
    /// host re-executes the node on every evaluation.
    fn is_changed(&self, _widgets: &WidgetValues) -> f64 {
        f64::NAN
    }
}

/// Host-facing wrapper around [`crate::AspectResizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ResizeToAspectNode;

impl HostNode for ResizeToAspectNode {
    fn schema(&self) -> NodeSchema {
        let defaults = ResizeParams::default();
        let int_input = |name: &str, default: usize| InputSpec {
            name: name.to_string(),
            kind: InputKind::Int {
                default: default as i64,
                min: MIN_DIMENSION as i64,
                max: MAX_DIMENSION as i64,
                step: 1,
                display: "number".to_string(),
            },
        };

        NodeSchema {
            category: NODE_CATEGORY.to_string(),
            function: NODE_FUNCTION.to_string(),
            required: vec![
                InputSpec {
                    name: "image".to_string(),
                    kind: InputKind::Image,
                },
                int_input("original_width", defaults.original_width),
                int_input("original_height", defaults.original_height),
                int_input("target_resolution", defaults.target_resolution),
                InputSpec {
                    name: "align_mode".to_string(),
                    kind: InputKind::Choice {
                        options: AlignMode::ALL.iter().map(|m| m.label().to_string()).collect(),
                        default: None,
                    },
                },
                InputSpec {
                    name: "interpolation".to_string(),
                    kind: InputKind::Choice {
                        options: InterpolationKernel::ALL
                            .iter()
                            .map(|k| k.name().to_string())
                            .collect(),
                        default: Some(defaults.interpolation.name().to_string()),
                    },
                },
            ],
            return_types: vec!["IMAGE".to_string()],
            return_names: vec!["image".to_string()],
        }
    }

    fn execute(&self, image: &ArrayD<f32>, widgets: &WidgetValues) -> Result<ArrayD<f32>> {
        let params = widgets.to_params()?;
        let batch = image
            .view()
            .into_dimensionality::<Ix4>()
            .map_err(|_| Error::ShapeMismatch {
                expected: "(batch, height, width, channel)".to_string(),
                actual: format!("{:?}", image.shape()),
            })?
            .to_owned();
        debug!("{} executing with {:?}", NODE_CLASS_NAME, params);
        Ok(resize_to_aspect(&batch, &params)?.into_dyn())
    }
}

/// Registration entry: class name, display name and constructor.
pub struct NodeRegistration {
    pub class_name: &'static str,
    pub display_name: &'static str,
    pub create: fn() -> Box<dyn HostNode>,
}

/// Every node this crate provides to the host.
pub fn node_registrations() -> Vec<NodeRegistration> {
    vec![NodeRegistration {
        class_name: NODE_CLASS_NAME,
        display_name: NODE_DISPLAY_NAME,
        create: create_resize_node,
    }]
}

fn create_resize_node() -> Box<dyn HostNode> {
    Box::new(ResizeToAspectNode)
}
