//! Serialization and shape tests for ToolOutput.

#[cfg(test)]
mod tests {
    use crate::core::{
        ChartData, ChartPoint, ChartType, DataFormat, Language, OutputKind, StructuredRecord,
        ToolOutput, Translation,
    };
    use pretty_assertions::assert_eq;

    fn translation() -> Translation {
        Translation {
            source_language: Language::En,
            target_language: Language::Es,
            source_text: "Hello".to_string(),
            translated_text: "Hola".to_string(),
            from_table: true,
        }
    }

    #[test]
    fn test_structured_kind_is_text() {
        let output = ToolOutput::structured(StructuredRecord::Translation(translation()));
        assert_eq!(output.kind(), OutputKind::Text);
        assert!(output.as_record().is_some());
        assert!(output.as_formatted().is_none());
    }

    #[test]
    fn test_formatted_serializes_with_type_tag() {
        let output = ToolOutput::formatted("## Summary");
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"type": "formatted_text", "content": "## Summary"})
        );
    }

    #[test]
    fn test_structured_round_trip() {
        let output = ToolOutput::structured(StructuredRecord::Chart(ChartData {
            chart_type: ChartType::Line,
            data_format: DataFormat::Csv,
            points: vec![ChartPoint { name: "Jan".to_string(), value: 400 }],
            palette: Vec::new(),
        }));

        let json = serde_json::to_string(&output).unwrap();
        let back: ToolOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn test_translation_dict_contains_record() {
        let output = ToolOutput::structured(StructuredRecord::Translation(translation()));
        let dict = output.to_dict();

        assert_eq!(dict.get("type"), Some(&serde_json::json!("text")));
        let record = dict.get("record").unwrap();
        assert_eq!(record["kind"], "translation");
        assert_eq!(record["translatedText"], "Hola");
    }

    #[test]
    fn test_empty_list_is_still_list() {
        let output = ToolOutput::list(Vec::<String>::new());
        assert_eq!(output.kind(), OutputKind::List);
        assert_eq!(output.as_list(), Some(&[][..]));
    }
}
