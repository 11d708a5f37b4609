//! Output file naming
//!
//! `<base>-thumbnail-<page>-<random>.<ext>`, where `<base>` is the last path
//! segment of a logical source name with dots replaced by dashes. Collision
//! avoidance is probabilistic only: no check against existing files is made.

use rand::Rng;

use crate::raster::ImageFormat;

/// Base used when the logical name has no usable last segment
pub const DEFAULT_BASE_NAME: &str = "pdf";

/// Sanitized base name for a logical source name
pub fn base_name(hint: &str) -> String {
    let last = hint
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    if last.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else {
        last.replace('.', "-")
    }
}

/// Output file name for `page_index` of `hint`, randomized with `rng`
pub fn output_file_name<R: Rng>(
    hint: &str,
    page_index: usize,
    format: ImageFormat,
    rng: &mut R,
) -> String {
    let random: i64 = rng.gen_range(0..i64::MAX);
    format!(
        "{}-thumbnail-{}-{}.{}",
        base_name(hint),
        page_index,
        random,
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/var/docs/report.final.pdf"), "report-final-pdf");
        assert_eq!(base_name("map.pdf"), "map-pdf");
        assert_eq!(base_name("C:\\docs\\scan.pdf"), "scan-pdf");
        assert_eq!(base_name("fion-geopdf"), "fion-geopdf");
    }

    #[test]
    fn test_base_name_fallback() {
        assert_eq!(base_name(""), DEFAULT_BASE_NAME);
        assert_eq!(base_name("/docs/"), DEFAULT_BASE_NAME);
    }

    #[test]
    fn test_output_file_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = output_file_name("/docs/atlas.pdf", 3, ImageFormat::Jpeg, &mut rng);

        let prefix = "atlas-pdf-thumbnail-3-";
        assert!(name.starts_with(prefix), "{}", name);
        assert!(name.ends_with(".jpg"), "{}", name);

        let random = &name[prefix.len()..name.len() - ".jpg".len()];
        let value: i64 = random.parse().unwrap();
        assert!(value >= 0);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = output_file_name("a.pdf", 0, ImageFormat::Png, &mut StdRng::seed_from_u64(42));
        let b = output_file_name("a.pdf", 0, ImageFormat::Png, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn test_successive_names_differ() {
        let mut rng = rand::thread_rng();
        let names: HashSet<String> = (0..1000)
            .map(|_| output_file_name("a.pdf", 0, ImageFormat::Jpeg, &mut rng))
            .collect();
        assert_eq!(names.len(), 1000);
    }
}
