use std::error;
use std::fs;
use std::str::FromStr;

use bib2json::{group, write_json, ConversionError, FieldValue, Parser, DEFAULT_GROUP};
use serde_json::{json, Value};

const DBLP: &str = r#"% publications exported from dblp

@inproceedings{DBLP:conf/icse/Doe19,
  author    = {Jane Doe and
               John Roe},
  title     = {Testing Things},
  booktitle = {Proceedings of the 41st International Conference on Software Engineering},
  _pages    = {100--110},
  publisher = {{IEEE} / {ACM}},
  year      = {2019}
}

@article{DBLP:journals/tse/Doe21,
  author    = {Jane Doe},
  title     = {More Testing},
  journal   = {{IEEE} Trans. Software Eng.},
  volume    = {47},
  number    = {3},
  year      = {2021}
}

@incollection{DBLP:books/sp/Roe20,
  author    = {John Roe},
  title     = {A Chapter},
  booktitle = {Handbook of Testing},
  series    = {Lecture Notes in Computer Science},
  volume    = {12000},
  year      = {2020}
}
"#;

fn keys(records: &[bib2json::Record]) -> Vec<String> {
    records.iter().map(|r| r.key().into_owned()).collect()
}

#[test]
fn test_convert_dblp_export() -> Result<(), Box<dyn error::Error>> {
    let records = Parser::from_str(DBLP)?.records()?;
    assert_eq!(records.len(), 3);

    assert_eq!(
        records[0].get("author"),
        Some(&FieldValue::Names(vec![
            "Jane Doe".to_string(),
            "John Roe".to_string()
        ]))
    );
    assert_eq!(
        records[0].get("desc"),
        Some(&FieldValue::Text(
            "In Proceedings of the 41st International Conference on Software Engineering, pp.100--110, IEEE / ACM"
                .to_string()
        ))
    );
    assert_eq!(
        records[1].get("desc"),
        Some(&FieldValue::Text("IEEE Trans. Software Eng., 47(3), 2021".to_string()))
    );
    assert_eq!(
        records[2].get("desc"),
        Some(&FieldValue::Text(
            "Handbook of Testing, Lecture Notes in Computer Science, volume 12000, 2020".to_string()
        ))
    );
    Ok(())
}

#[test]
fn test_group_by_pubtype() -> Result<(), Box<dyn error::Error>> {
    let records = Parser::from_str(DBLP)?.records()?;
    let grouped = group(records, Some("pubtype"))?;
    let names: Vec<&String> = grouped.keys().collect();
    assert_eq!(names, ["article", "incollection", "inproceedings"]);
    assert_eq!(keys(&grouped["article"]), ["DBLP:journals/tse/Doe21"]);
    Ok(())
}

#[test]
fn test_group_fallback_to_items() -> Result<(), Box<dyn error::Error>> {
    let records = Parser::from_str(DBLP)?.records()?;
    // only the inproceedings entry has a publisher
    let grouped = group(records, Some("publisher"))?;
    assert_eq!(grouped.len(), 1);
    assert_eq!(
        keys(&grouped[DEFAULT_GROUP]),
        [
            "DBLP:journals/tse/Doe21",
            "DBLP:books/sp/Roe20",
            "DBLP:conf/icse/Doe19"
        ]
    );
    Ok(())
}

#[test]
fn test_json_document() -> Result<(), Box<dyn error::Error>> {
    let src = "@article{k1, author={A, B and C, D}, journal={J}, volume={5}, number={2}, pages={10-20}, year={2020}}";
    let grouped = group(Parser::from_str(src)?.records()?, None)?;
    let mut out = Vec::new();
    write_json(&mut out, &grouped, false)?;
    let document: Value = serde_json::from_slice(&out)?;
    assert_eq!(
        document,
        json!({
            "items": [{
                "pubtype": "article",
                "key": "k1",
                "author": ["A, B", "C, D"],
                "journal": "J",
                "volume": "5",
                "number": "2",
                "pages": "10-20",
                "year": "2020",
                "desc": "J, 5(2), 2020"
            }]
        })
    );
    Ok(())
}

#[test]
fn test_unknown_type_aborts() -> Result<(), Box<dyn error::Error>> {
    let src = format!("{}\n@thesis{{t1, school={{MIT}}, year={{1999}}}}\n", DBLP);
    match Parser::from_str(&src)?.records() {
        Err(ConversionError::UnknownType { pubtype, entry }) => {
            assert_eq!(pubtype, "thesis");
            assert!(entry.contains("school={MIT}"));
        }
        other => panic!("expected UnknownType, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_from_file() -> Result<(), Box<dyn error::Error>> {
    let path = std::env::temp_dir().join(format!("bib2json-{}.bib", std::process::id()));
    fs::write(&path, DBLP)?;
    let records = Parser::from_file(&path)?.records();
    fs::remove_file(&path)?;
    assert_eq!(records?.len(), 3);

    assert!(Parser::from_file(path).is_err());
    Ok(())
}
