#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use crate::commands::HostCommand;
    use crate::enums::{NodeType, ReticleTexture, Sound};
    use crate::level::Level;
    use crate::shading::ambient_blend;
    use crate::types::{pose_distance, AnchorId, Point2};

    #[test]
    fn test_node_type_classification() {
        assert_eq!(NodeType::from_name("bug"), Some(NodeType::Bug));
        assert_eq!(NodeType::from_name("firebug"), Some(NodeType::Firebug));
        assert_eq!(NodeType::from_name("bugspray"), Some(NodeType::Bugspray));
        assert_eq!(NodeType::from_name("Bug"), None);
        assert_eq!(NodeType::from_name("petunia"), None);
        assert_eq!(NodeType::from_name(""), None);
    }

    #[test]
    fn test_node_type_name_round_trip() {
        for t in [NodeType::Bug, NodeType::Firebug, NodeType::Bugspray] {
            assert_eq!(NodeType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_ambient_blend_bounds() {
        // At or above the neutral ceiling: full brightness.
        assert_eq!(ambient_blend(1000.0), 0.0);
        assert_eq!(ambient_blend(5000.0), 0.0);
        // Total darkness: full tint.
        assert_eq!(ambient_blend(0.0), 1.0);
        // Negative readings are treated as darkness.
        assert_eq!(ambient_blend(-50.0), 1.0);
        // Midpoint.
        assert!((ambient_blend(500.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ambient_blend_monotonic() {
        let mut prev = ambient_blend(0.0);
        for i in 1..=120 {
            let blend = ambient_blend(i as f32 * 10.0);
            assert!(
                blend <= prev,
                "blend must be non-increasing in intensity, rose at I={}",
                i * 10
            );
            assert!((0.0..=1.0).contains(&blend));
            prev = blend;
        }
    }

    #[test]
    fn test_pose_distance() {
        let a = Mat4::from_translation(Vec3::new(1.0, 2.0, 2.0));
        let b = Mat4::IDENTITY;
        assert!((pose_distance(&a, &b) - 3.0).abs() < 1e-6);
        // Rotation does not affect translation distance.
        let c = Mat4::from_rotation_y(1.2) * Mat4::from_translation(Vec3::ZERO);
        assert!(pose_distance(&c, &b) < 1e-6);
    }

    /// HostCommand is a tagged union so the host can dispatch on "type".
    #[test]
    fn test_host_command_serde_tag() {
        let cmd = HostCommand::PlaySound { sound: Sound::Fire };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"PlaySound\""), "got {json}");

        let cmd = HostCommand::SetReticleTexture {
            texture: ReticleTexture::PowerUp,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);

        let cmd = HostCommand::RemoveAnchor { id: AnchorId(7) };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }

    #[test]
    fn test_level_from_json() {
        let json = r#"{
            "size": { "x": 200.0, "y": 100.0 },
            "placeholders": [
                { "name": "bug", "position": { "x": 50.0, "y": -25.0 } },
                { "name": "label", "position": { "x": 0.0, "y": 0.0 } }
            ]
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.size, Point2::new(200.0, 100.0));
        assert_eq!(level.placeholders.len(), 2);
        assert_eq!(level.placeholders[0].name, "bug");

        assert!(Level::from_json("{").is_err());
    }

    #[test]
    fn test_builtin_level_composition() {
        let level = Level::bug_hunt();
        let bugs = level
            .placeholders
            .iter()
            .filter(|p| p.name == "bug")
            .count();
        let firebugs = level
            .placeholders
            .iter()
            .filter(|p| p.name == "firebug")
            .count();
        assert_eq!(bugs, 5);
        assert_eq!(firebugs, 1);
        // No pre-placed bugsprays: those are spawned per firebug.
        assert!(level.placeholders.iter().all(|p| p.name != "bugspray"));
        // Every placeholder fits the reference canvas.
        for p in &level.placeholders {
            assert!(p.position.x.abs() <= level.size.x / 2.0);
            assert!(p.position.y.abs() <= level.size.y / 2.0);
        }
    }
}
