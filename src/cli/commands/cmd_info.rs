use crate::services::SUPPORTED_OBJECT_TYPES;

pub fn supported_objects_text() -> String {
    let mut text =
        String::from("The program can generate DDL for the following object types:\n");
    for object_type in SUPPORTED_OBJECT_TYPES {
        text.push_str(&format!("\t{}\n", object_type.ddl_label()));
    }
    text
}

pub fn execute() {
    print!("{}", supported_objects_text());
}
