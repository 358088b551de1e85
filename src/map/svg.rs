//! Extraction of drawable paths from a fetched vector map document.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::AppError;

/// One `<path>` pulled out of the source document, before country
/// resolution. Inline `style`/`fill`/`stroke` attributes are not carried
/// over; the stylesheet fully controls appearance.
#[derive(Clone, PartialEq, Debug)]
pub struct MapPathSeed {
    pub data: String,
    pub id: Option<String>,
    pub class: Option<String>,
    pub explicit_name: Option<String>,
}

/// Parses the document and returns every path element in document order.
/// Elements without path data are skipped.
pub fn parse_map_paths(svg_text: &str) -> Result<Vec<MapPathSeed>, AppError> {
    let mut reader = Reader::from_str(svg_text);
    let mut seeds = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                if element.local_name().as_ref() != b"path" {
                    continue;
                }
                let mut data = None;
                let mut id = None;
                let mut class = None;
                let mut data_name = None;
                let mut name = None;
                for attr in element.attributes() {
                    let attr = attr.map_err(|e| AppError::MapDocument(e.to_string()))?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| AppError::MapDocument(e.to_string()))?
                        .into_owned();
                    match attr.key.as_ref() {
                        b"d" => data = Some(value),
                        b"id" => id = Some(value),
                        b"class" => class = Some(value),
                        b"data-name" => data_name = Some(value),
                        b"name" => name = Some(value),
                        _ => {}
                    }
                }
                if let Some(data) = data {
                    seeds.push(MapPathSeed {
                        data,
                        id,
                        class,
                        explicit_name: data_name.or(name),
                    });
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(AppError::MapDocument(e.to_string())),
        }
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1016.371 514.609">
        <path id="US" class="land" d="M1,1 L2,2Z" fill="#ccc" stroke="#000" style="opacity:.5"/>
        <path id="FR" data-name="France" d="M3,3 L4,4Z"/>
        <g><path class="deu" d="M5,5 L6,6Z"></path></g>
        <path id="legend"/>
    </svg>"##;

    #[test]
    fn extracts_paths_in_document_order() {
        let seeds = parse_map_paths(SAMPLE).unwrap();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].id.as_deref(), Some("US"));
        assert_eq!(seeds[1].explicit_name.as_deref(), Some("France"));
        assert_eq!(seeds[2].class.as_deref(), Some("deu"));
    }

    #[test]
    fn pathless_elements_are_skipped() {
        let seeds = parse_map_paths(SAMPLE).unwrap();
        assert!(seeds.iter().all(|s| !s.data.is_empty()));
    }

    #[test]
    fn presentation_attributes_are_not_carried() {
        // The seed only models data + classification attributes; fill,
        // stroke and style from the source never reach the live paths.
        let seeds = parse_map_paths(SAMPLE).unwrap();
        assert_eq!(seeds[0].data, "M1,1 L2,2Z");
        assert_eq!(seeds[0].class.as_deref(), Some("land"));
    }

    #[test]
    fn data_name_wins_over_name() {
        let svg = r#"<svg><path d="M0,0" data-name="Explicit" name="Other"/></svg>"#;
        let seeds = parse_map_paths(svg).unwrap();
        assert_eq!(seeds[0].explicit_name.as_deref(), Some("Explicit"));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_map_paths("<svg><path d=\"M0,0\"").is_err());
    }

    #[test]
    fn document_without_paths_yields_empty_set() {
        let seeds = parse_map_paths("<svg><rect width=\"4\"/></svg>").unwrap();
        assert!(seeds.is_empty());
    }
}
