//! Kinematic chain extracted from a robot description.
//!
//! A [`KinematicChain`] is the ordered list of segments between a root
//! link and a tip link. Each segment carries the fixed pose from its base
//! frame to its tip frame; the transformation table and forward-kinematics
//! consumers downstream are index-aligned with this order.

use std::collections::HashSet;

use nalgebra::{Isometry3, Matrix3, Rotation3, Translation3, UnitQuaternion};

use armature_urdf::{Origin, RobotModel};

use crate::error::KinematicsError;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One link-plus-joint unit within a chain.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Segment name (the child link the joint connects to).
    pub name: String,
    /// Name of the joint at the base of this segment.
    pub joint_name: String,
    /// Whether the joint is actuated (revolute, continuous, prismatic).
    pub actuated: bool,
    /// Fixed pose from the segment's base frame to its tip frame.
    pub frame_to_tip: Isometry3<f64>,
}

// ---------------------------------------------------------------------------
// ChainSource
// ---------------------------------------------------------------------------

/// Capability to extract a linear chain from a tree-structured description.
///
/// The chain builder depends only on this capability, not on a specific
/// description library's object model. A degenerate result (no path, or
/// no actuated joints) is reported as an empty or joint-less segment
/// list, not an error; validation happens in
/// [`KinematicChain::from_source`]. Errors are reserved for a source
/// whose own data is inconsistent.
pub trait ChainSource {
    /// Ordered segments along the path from `root` to `tip`, root first.
    fn query_chain(&self, root: &str, tip: &str) -> Result<Vec<Segment>, KinematicsError>;
}

impl ChainSource for RobotModel {
    fn query_chain(&self, root: &str, tip: &str) -> Result<Vec<Segment>, KinematicsError> {
        let Some(path) = find_path(self, root, tip) else {
            return Ok(Vec::new());
        };

        path.iter()
            .map(|joint_name| {
                // A joint named on the path but missing from the model would
                // break index-alignment if skipped; abort the chain instead.
                let joint = self.joint(joint_name)?;
                Ok(Segment {
                    name: joint.child.clone(),
                    joint_name: joint.name.clone(),
                    actuated: joint.joint_type.is_actuated(),
                    frame_to_tip: origin_to_isometry(&joint.origin),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// KinematicChain
// ---------------------------------------------------------------------------

/// An ordered kinematic chain from a root link to a tip link.
///
/// Built once per initialization and read-only afterwards. Guaranteed
/// non-degenerate: at least one segment and at least one actuated joint.
#[derive(Debug, Clone)]
pub struct KinematicChain {
    segments: Vec<Segment>,
}

impl KinematicChain {
    /// Extract the chain between `root` and `tip` from a robot model.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::ChainConstruction`] when the resulting
    /// chain has zero segments (disconnected names, `root == tip`) or
    /// zero actuated joints (a path of only fixed joints). Fatal: no
    /// partial chain is usable downstream.
    pub fn from_model(
        model: &RobotModel,
        root: &str,
        tip: &str,
    ) -> Result<Self, KinematicsError> {
        Self::from_source(model, root, tip)
    }

    /// Extract the chain from any [`ChainSource`].
    pub fn from_source(
        source: &impl ChainSource,
        root: &str,
        tip: &str,
    ) -> Result<Self, KinematicsError> {
        let segments = source.query_chain(root, tip)?;
        let joints = segments.iter().filter(|s| s.actuated).count();

        if joints == 0 || segments.is_empty() {
            return Err(KinematicsError::ChainConstruction {
                root: root.into(),
                tip: tip.into(),
                joints,
                segments: segments.len(),
            });
        }

        Ok(Self { segments })
    }

    /// Segments in chain order (segment 0 is closest to the root).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Number of actuated joints.
    pub fn num_joints(&self) -> usize {
        self.segments.iter().filter(|s| s.actuated).count()
    }

    /// Actuated joint names in chain order.
    pub fn joint_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.actuated)
            .map(|s| s.joint_name.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a URDF [`Origin`] (xyz + rpy) to an [`Isometry3`].
pub(crate) fn origin_to_isometry(origin: &Origin) -> Isometry3<f64> {
    let translation = Translation3::new(origin.xyz[0], origin.xyz[1], origin.xyz[2]);
    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
        rotation_matrix_from_rpy(origin.rpy[0], origin.rpy[1], origin.rpy[2]),
    ));
    Isometry3::from_parts(translation, rotation)
}

/// Build a rotation matrix from roll-pitch-yaw (intrinsic XYZ / extrinsic ZYX).
fn rotation_matrix_from_rpy(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    // Extrinsic ZYX = Intrinsic XYZ
    Matrix3::new(
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    )
}

/// Find the ordered list of joint names from `root` to `target` link.
///
/// A link is descended into at most once, so a malformed description with
/// a joint cycle terminates; the revisited link is treated as a dead
/// branch and the cycle surfaces as "no path".
fn find_path(model: &RobotModel, root: &str, target: &str) -> Option<Vec<String>> {
    let mut visited = HashSet::new();
    find_path_from(model, root, target, &mut visited)
}

fn find_path_from<'a>(
    model: &'a RobotModel,
    root: &str,
    target: &str,
    visited: &mut HashSet<&'a str>,
) -> Option<Vec<String>> {
    if root == target {
        return Some(Vec::new());
    }

    // For each joint leaving `root`, try DFS towards the target.
    for joint in model.joints.values() {
        if joint.parent != root {
            continue;
        }
        if joint.child == target {
            return Some(vec![joint.name.clone()]);
        }
        if visited.insert(joint.child.as_str()) {
            if let Some(mut path) = find_path_from(model, &joint.child, target, visited) {
                path.insert(0, joint.name.clone());
                return Some(path);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use armature_urdf::{UrdfError, parse_string};

    const TWO_JOINT_ARM: &str = r#"
        <robot name="two_joint_arm">
            <link name="base"/>
            <link name="upper_arm"/>
            <link name="forearm"/>
            <link name="end_effector"/>
            <joint name="shoulder" type="revolute">
                <parent link="base"/><child link="upper_arm"/>
                <origin xyz="0 0 0.05" rpy="0 0 0"/>
                <axis xyz="0 0 1"/>
                <limit lower="-2.617" upper="2.617" effort="50" velocity="3"/>
            </joint>
            <joint name="elbow" type="revolute">
                <parent link="upper_arm"/><child link="forearm"/>
                <origin xyz="0 0 0.3" rpy="0 0 0"/>
                <axis xyz="0 0 1"/>
                <limit lower="-2.094" upper="2.094" effort="30" velocity="5"/>
            </joint>
            <joint name="ee_fixed" type="fixed">
                <parent link="forearm"/><child link="end_effector"/>
                <origin xyz="0 0 0.25"/>
            </joint>
        </robot>
    "#;

    const FIXED_ONLY: &str = r#"
        <robot name="mount">
            <link name="base"/>
            <link name="plate"/>
            <joint name="mount" type="fixed">
                <parent link="base"/><child link="plate"/>
                <origin xyz="0 0 0.1"/>
            </joint>
        </robot>
    "#;

    // Malformed description: the b_a joint closes a loop back onto "a",
    // while "root" is still inferable as the root link (never a child).
    const LOOPED: &str = r#"
        <robot name="looped">
            <link name="root"/>
            <link name="a"/>
            <link name="b"/>
            <joint name="root_a" type="revolute">
                <parent link="root"/><child link="a"/>
                <axis xyz="0 0 1"/>
                <limit lower="-1" upper="1" effort="10" velocity="1"/>
            </joint>
            <joint name="a_b" type="revolute">
                <parent link="a"/><child link="b"/>
                <axis xyz="0 0 1"/>
                <limit lower="-1" upper="1" effort="10" velocity="1"/>
            </joint>
            <joint name="b_a" type="revolute">
                <parent link="b"/><child link="a"/>
                <axis xyz="0 0 1"/>
                <limit lower="-1" upper="1" effort="10" velocity="1"/>
            </joint>
        </robot>
    "#;

    // -- Chain extraction --

    #[test]
    fn chain_from_two_joint_arm() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let chain = KinematicChain::from_model(&model, "base", "end_effector").unwrap();
        assert_eq!(chain.num_segments(), 3);
        assert_eq!(chain.num_joints(), 2);
        assert_eq!(chain.joint_names(), vec!["shoulder", "elbow"]);
    }

    #[test]
    fn segments_in_chain_order() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let chain = KinematicChain::from_model(&model, "base", "end_effector").unwrap();
        let names: Vec<&str> = chain.segments().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["upper_arm", "forearm", "end_effector"]);
        assert!(chain.segments()[0].actuated);
        assert!(chain.segments()[1].actuated);
        assert!(!chain.segments()[2].actuated);
    }

    #[test]
    fn segment_frame_to_tip_carries_origin() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let chain = KinematicChain::from_model(&model, "base", "end_effector").unwrap();
        let pose = &chain.segments()[1].frame_to_tip;
        assert_relative_eq!(pose.translation.z, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn chain_from_intermediate_root() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let chain = KinematicChain::from_model(&model, "upper_arm", "end_effector").unwrap();
        assert_eq!(chain.num_segments(), 2);
        assert_eq!(chain.num_joints(), 1);
    }

    // -- Degenerate chains --

    #[test]
    fn disconnected_tip_is_chain_construction_error() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let err = KinematicChain::from_model(&model, "base", "nonexistent").unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::ChainConstruction {
                joints: 0,
                segments: 0,
                ..
            }
        ));
    }

    #[test]
    fn root_equals_tip_is_chain_construction_error() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let err = KinematicChain::from_model(&model, "base", "base").unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::ChainConstruction { segments: 0, .. }
        ));
    }

    #[test]
    fn fixed_only_path_has_zero_joints() {
        let model = parse_string(FIXED_ONLY).unwrap();
        let err = KinematicChain::from_model(&model, "base", "plate").unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::ChainConstruction {
                joints: 0,
                segments: 1,
                ..
            }
        ));
    }

    #[test]
    fn cyclic_description_is_chain_construction_error() {
        // The search must terminate on the a -> b -> a loop and report the
        // unreachable tip as a degenerate chain, not diverge.
        let model = parse_string(LOOPED).unwrap();
        let err = KinematicChain::from_model(&model, "root", "missing").unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::ChainConstruction {
                joints: 0,
                segments: 0,
                ..
            }
        ));
    }

    #[test]
    fn reachable_tip_found_despite_cycle() {
        let model = parse_string(LOOPED).unwrap();
        let chain = KinematicChain::from_model(&model, "root", "b").unwrap();
        assert_eq!(chain.num_segments(), 2);
        assert_eq!(chain.joint_names(), vec!["root_a", "a_b"]);
    }

    #[test]
    fn reversed_direction_finds_no_path() {
        let model = parse_string(TWO_JOINT_ARM).unwrap();
        let err = KinematicChain::from_model(&model, "end_effector", "base").unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::ChainConstruction { segments: 0, .. }
        ));
    }

    // -- Source failures --

    struct BrokenSource;

    impl ChainSource for BrokenSource {
        fn query_chain(&self, _root: &str, _tip: &str) -> Result<Vec<Segment>, KinematicsError> {
            Err(KinematicsError::Description(UrdfError::MissingJoint(
                "shoulder".into(),
            )))
        }
    }

    #[test]
    fn source_failure_propagates_instead_of_truncating() {
        // An inconsistent source must abort the build; a chain with a
        // silently dropped segment would misalign every downstream table.
        let err = KinematicChain::from_source(&BrokenSource, "base", "tip").unwrap_err();
        assert!(matches!(err, KinematicsError::Description(_)));
    }

    // -- origin_to_isometry --

    #[test]
    fn origin_to_isometry_identity() {
        let iso = origin_to_isometry(&Origin::default());
        assert_relative_eq!(iso.translation.vector.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(iso.rotation.angle(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn origin_to_isometry_translation() {
        let origin = Origin {
            xyz: [1.0, 2.0, 3.0],
            rpy: [0.0, 0.0, 0.0],
        };
        let iso = origin_to_isometry(&origin);
        assert_relative_eq!(iso.translation.x, 1.0);
        assert_relative_eq!(iso.translation.y, 2.0);
        assert_relative_eq!(iso.translation.z, 3.0);
    }

    #[test]
    fn origin_to_isometry_yaw_rotates_x_to_y() {
        let origin = Origin {
            xyz: [0.0; 3],
            rpy: [0.0, 0.0, std::f64::consts::FRAC_PI_2],
        };
        let iso = origin_to_isometry(&origin);
        let rotated = iso.rotation * nalgebra::Vector3::x();
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }
}
