//! End-to-end behavior of the directive loop
//!
//! Exercises whole buffers through the parser and checks the resulting model,
//! including the lenient handling of junk and truncated input.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use crate::assets::materials::{Material, MaterialLoader, Model, DEFAULT_MATERIAL_NAME};
    use crate::foundation::math::Color3;

    fn parse(text: &str) -> Model {
        MaterialLoader::parse_str(text)
    }

    #[test]
    fn test_empty_input_yields_only_default() {
        let model = parse("");
        assert!(model.is_empty());
        assert!(model.library().is_empty());

        let default = model.default_material().expect("default material created");
        assert_eq!(*default, Material::new(DEFAULT_MATERIAL_NAME));
        assert_eq!(default.diffuse, Color3::zeros());
        assert_eq!(default.alpha, 0.0);
        assert_eq!(default.illumination_model, 0);
        assert!(default.texture.is_none());
    }

    #[test]
    fn test_basic_material() {
        let model = parse("newmtl Mat1\nKd 1.0 0.5 0.25\nNs 96.0\nillum 2\n");

        assert_eq!(model.library(), ["Mat1"]);
        let mat = model.get("Mat1").unwrap();
        assert_relative_eq!(mat.diffuse, Color3::new(1.0, 0.5, 0.25));
        assert_relative_eq!(mat.shininess, 96.0);
        assert_eq!(mat.illumination_model, 2);
    }

    #[test]
    fn test_redeclaration_accumulates() {
        let model = parse("newmtl M\nKd 1 0 0\nnewmtl M\nKs 0 1 0\n");

        assert_eq!(model.library(), ["M"]);
        let m = model.get("M").unwrap();
        assert_relative_eq!(m.diffuse, Color3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(m.specular, Color3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_unknown_lines_are_skipped() {
        let text = "\
newmtl A
Kd 0.1 0.2 0.3
# a comment Kd 9 9 9
bump textures/normal.png
Tr 0.5
Pr 0.3

illum 1
";
        let model = parse(text);
        let a = model.get("A").unwrap();
        assert_relative_eq!(a.diffuse, Color3::new(0.1, 0.2, 0.3));
        assert_eq!(a.alpha, 0.0);
        assert!(a.texture.is_none());
        assert_eq!(a.illumination_model, 1);
        assert_eq!(model.current_material().unwrap().name, "A");
    }

    #[test]
    fn test_property_before_declaration_hits_default() {
        let model = parse("Kd 1 1 1\n");

        assert!(model.is_empty());
        let default = model.default_material().unwrap();
        assert_relative_eq!(default.diffuse, Color3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_malformed_number_is_zero() {
        let model = parse("newmtl M\nKd abc 0 0\n");
        assert_eq!(model.get("M").unwrap().diffuse, Color3::zeros());

        let model = parse("newmtl M\nillum two\nNs -\n");
        let m = model.get("M").unwrap();
        assert_eq!(m.illumination_model, 0);
        assert_eq!(m.shininess, 0.0);
    }

    #[test]
    fn test_incomplete_color_pads_with_zero() {
        let model = parse("newmtl M\nKa 0.7\nKd 0.2 0.4");
        let m = model.get("M").unwrap();
        assert_relative_eq!(m.ambient, Color3::new(0.7, 0.0, 0.0));
        assert_relative_eq!(m.diffuse, Color3::new(0.2, 0.4, 0.0));
    }

    #[test]
    fn test_truncated_final_line() {
        let model = parse("newmtl A\nKd 1 0 0\nnewmt");
        assert_eq!(model.library(), ["A"]);
        assert_relative_eq!(model.get("A").unwrap().diffuse, Color3::new(1.0, 0.0, 0.0));

        for cut in ["K", "Kd", "Kd ", "N", "i", "m", "map_Kd", "d"] {
            let model = parse(&format!("newmtl A\nNs 3\n{cut}"));
            assert_eq!(model.library(), ["A"], "input cut at {cut:?}");
            assert_relative_eq!(model.get("A").unwrap().shininess, 3.0);
        }
    }

    #[test]
    fn test_library_has_no_duplicates() {
        let text = "newmtl a\nnewmtl b\nnewmtl a\nnewmtl c\nnewmtl b\nnewmtl a\n";
        let model = parse(text);

        let distinct: HashSet<&str> = text
            .lines()
            .filter_map(|line| line.strip_prefix("newmtl "))
            .collect();
        assert_eq!(model.len(), distinct.len());
        assert_eq!(model.library(), ["a", "b", "c"]);

        let unique: HashSet<&String> = model.library().iter().collect();
        assert_eq!(unique.len(), model.library().len());
        for name in model.library() {
            assert_eq!(&model.get(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_binary_garbage_does_not_panic() {
        let mut data: Vec<u8> = (0u8..=255).collect();
        data.extend_from_slice(b"\nnewmtl \xff\xfeodd\nKd 1 2 3\n\r\r\n\0\0");
        let model = MaterialLoader::parse_bytes(&data);

        assert_eq!(model.len(), 1);
        let odd = model.iter().next().unwrap();
        assert_relative_eq!(odd.diffuse, Color3::new(1.0, 2.0, 3.0));
    }
}
