use proptest::prelude::*;
use wuerfel_mesh::BlockMesh;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Vertex and triangle totals follow the lattice formulas for any n.
    #[test]
    fn totals_follow_the_subdivision_count(n in 2u32..=14) {
        let mesh = BlockMesh::build(n).unwrap();
        let run = (n - 2) as usize;
        let cells = (n - 1) as usize;
        prop_assert_eq!(mesh.vertices().len(), 8 + 12 * run + 6 * run * run);
        prop_assert_eq!(mesh.triangles().len(), 12 * cells * cells);
        prop_assert!(mesh.validate().is_ok());
    }

    // Triangle indices always reference the vertex table.
    #[test]
    fn triangles_reference_valid_vertices(n in 2u32..=14) {
        let mesh = BlockMesh::build(n).unwrap();
        let count = mesh.vertices().len() as u32;
        for tri in mesh.triangles() {
            prop_assert!(tri.iter().all(|&i| i < count));
            // degenerate triangles never appear
            prop_assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }
}
