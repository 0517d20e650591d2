use crate::domain::a001_name::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a002_category::aggregate::{fallback_categories, CategoryGroup};
use sea_orm::ConnectionTrait;
use std::collections::{BTreeMap, BTreeSet};

/// Категории из базы; резервный список только если база недоступна
pub async fn list_categories() -> Vec<CategoryGroup> {
    let groups = match get_connection() {
        Ok(db) => list_categories_in(db).await,
        Err(e) => Err(e),
    };
    or_fallback(groups)
}

/// Пустая таблица даёт пустой список, ошибка даёт резервный
fn or_fallback(groups: anyhow::Result<Vec<CategoryGroup>>) -> Vec<CategoryGroup> {
    match groups {
        Ok(groups) => groups,
        Err(e) => {
            tracing::error!("Failed to list categories: {}", e);
            fallback_categories()
        }
    }
}

pub async fn list_categories_in<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<CategoryGroup>> {
    let pairs = repository::list_category_pairs(db).await?;
    Ok(group_pairs(pairs))
}

/// Группировка пар: категории и подкатегории по алфавиту, без повторов
pub fn group_pairs(pairs: Vec<(String, String)>) -> Vec<CategoryGroup> {
    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (category, subcategory) in pairs {
        let category = category.trim();
        if category.is_empty() {
            continue;
        }
        let entry = grouped.entry(category.to_string()).or_default();
        let subcategory = subcategory.trim();
        if !subcategory.is_empty() {
            entry.insert(subcategory.to_string());
        }
    }
    grouped
        .into_iter()
        .map(|(category, subcategories)| CategoryGroup {
            category,
            subcategories: subcategories.into_iter().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_name::service::insert_rows;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a001_name::aggregate::NameImportDto;

    fn pair(c: &str, s: &str) -> (String, String) {
        (c.to_string(), s.to_string())
    }

    #[test]
    fn groups_are_sorted_and_deduplicated() {
        let groups = group_pairs(vec![
            pair("Modern", "Robot Names"),
            pair("Fantasy Races", "Elf Names"),
            pair("Fantasy Races", "Dwarf Names"),
            pair("Fantasy Races", "Elf Names"),
            pair("  ", "Orphan Names"),
        ]);
        assert_eq!(
            groups,
            vec![
                CategoryGroup::new("Fantasy Races", &["Dwarf Names", "Elf Names"]),
                CategoryGroup::new("Modern", &["Robot Names"]),
            ]
        );
    }

    #[test]
    fn fallback_only_on_error() {
        assert!(or_fallback(Ok(Vec::new())).is_empty());
        assert_eq!(
            or_fallback(Err(anyhow::anyhow!("database is locked"))),
            fallback_categories()
        );
    }

    #[tokio::test]
    async fn empty_store_lists_no_categories() {
        let db = connect_in_memory().await.unwrap();
        assert!(or_fallback(list_categories_in(&db).await).is_empty());
    }

    #[tokio::test]
    async fn lists_groups_from_store() {
        let db = connect_in_memory().await.unwrap();
        assert!(list_categories_in(&db).await.unwrap().is_empty());

        insert_rows(
            &db,
            vec![NameImportDto {
                name: "Rowan".into(),
                meaning: None,
                origin: None,
                gender: None,
                category: "Characters".into(),
                subcategory: "Ranger Names".into(),
                popularity: None,
            }],
        )
        .await
        .unwrap();
        let groups = list_categories_in(&db).await.unwrap();
        assert_eq!(groups, vec![CategoryGroup::new("Characters", &["Ranger Names"])]);
    }
}
