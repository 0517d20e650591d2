use chrono::Utc;
use contracts::domain::a001_name::aggregate::{NameId, NameRecord};
use contracts::domain::a001_name::gender::Gender;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{Condition, PaginatorTrait, QueryOrder, QuerySelect, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_name")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub meaning: Option<String>,
    pub origin: Option<String>,
    pub gender: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub popularity: Option<i32>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NameRecord {
    fn from(m: Model) -> Self {
        NameRecord {
            id: NameId(m.id),
            name: m.name,
            meaning: m.meaning,
            origin: m.origin,
            gender: m.gender.as_deref().and_then(Gender::from_tag),
            category: m.category,
            subcategory: m.subcategory,
            popularity: m.popularity,
            created_at: m.created_at,
        }
    }
}

fn to_active(record: &NameRecord) -> ActiveModel {
    let now = Utc::now();
    ActiveModel {
        id: Set(record.id.value().to_string()),
        name: Set(record.name.clone()),
        meaning: Set(record.meaning.clone()),
        origin: Set(record.origin.clone()),
        gender: Set(record.gender.as_ref().map(|g| g.as_str().to_string())),
        category: Set(record.category.clone()),
        subcategory: Set(record.subcategory.clone()),
        popularity: Set(record.popularity),
        created_at: Set(Some(record.created_at.unwrap_or(now))),
        updated_at: Set(Some(now)),
    }
}

/// Экранирует `%`, `_` и `\` для LIKE с escape-символом `\`.
/// Регистр сворачиваем только для ASCII, как это делает `lower()` в SQLite.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.to_ascii_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Поиск имён: подстрока без учёта регистра в category ИЛИ subcategory.
/// `None` означает выборку без фильтра. Сначала популярные, затем по алфавиту.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    needle: Option<&str>,
    limit: usize,
) -> anyhow::Result<Vec<NameRecord>> {
    let mut query = Entity::find();

    if let Some(needle) = needle {
        let pattern = like_pattern(needle);
        query = query.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col(Column::Category)))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(Column::Subcategory)))
                        .like(LikeExpr::new(pattern).escape('\\')),
                ),
        );
    }

    let items = query
        .order_by_desc(Column::Popularity)
        .order_by_asc(Column::Name)
        .limit(limit as u64)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Уникальные пары (category, subcategory)
pub async fn list_category_pairs<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<(String, String)>> {
    let pairs = Entity::find()
        .select_only()
        .column(Column::Category)
        .column(Column::Subcategory)
        .distinct()
        .into_tuple::<(String, String)>()
        .all(db)
        .await?;
    Ok(pairs)
}

/// Вставка пачками, возвращает количество записей
pub async fn insert_many<C: ConnectionTrait>(db: &C, records: &[NameRecord]) -> anyhow::Result<usize> {
    for chunk in records.chunks(50) {
        Entity::insert_many(chunk.iter().map(to_active))
            .exec_without_returning(db)
            .await?;
    }
    Ok(records.len())
}

pub async fn count<C: ConnectionTrait>(db: &C) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn record(name: &str, category: &str, subcategory: &str, popularity: Option<i32>) -> NameRecord {
        NameRecord {
            id: NameId::new_v4(),
            name: name.into(),
            meaning: None,
            origin: None,
            gender: Some(Gender::Female),
            category: category.into(),
            subcategory: subcategory.into(),
            popularity,
            created_at: None,
        }
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Elf"), "%elf%");
        assert_eq!(like_pattern("100%_x"), "%100\\%\\_x%");
    }

    #[tokio::test]
    async fn search_matches_category_or_subcategory() {
        let db = connect_in_memory().await.unwrap();
        insert_many(
            &db,
            &[
                record("Aelar", "Fantasy Races", "Elf Names", Some(10)),
                record("Thorin", "Fantasy Races", "Dwarf Names", Some(90)),
                record("Merlin", "Characters", "Wizard Names", None),
            ],
        )
        .await
        .unwrap();

        let found = search(&db, Some("ELF"), 50).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Aelar");

        let races = search(&db, Some("races"), 50).await.unwrap();
        let names: Vec<_> = races.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Thorin", "Aelar"]);

        assert_eq!(search(&db, None, 2).await.unwrap().len(), 2);
        assert_eq!(count(&db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn search_treats_percent_literally() {
        let db = connect_in_memory().await.unwrap();
        insert_many(&db, &[record("Kael", "Fantasy Races", "Elf Names", None)])
            .await
            .unwrap();
        assert!(search(&db, Some("%"), 50).await.unwrap().is_empty());
        assert!(search(&db, Some("_lf"), 50).await.unwrap().is_empty());
    }

    #[test]
    fn like_pattern_keeps_non_ascii_case() {
        assert_eq!(like_pattern("Élfe Names"), "%Élfe names%");
    }

    #[tokio::test]
    async fn search_matches_non_ascii_subcategory() {
        let db = connect_in_memory().await.unwrap();
        insert_many(
            &db,
            &[
                record("Aëlwen", "Fantasy Races", "Élfe Names", None),
                record("Thorin", "Fantasy Races", "Dwarf Names", None),
            ],
        )
        .await
        .unwrap();

        let exact = search(&db, Some("Élfe Names"), 50).await.unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].name, "Aëlwen");

        let ascii_case = search(&db, Some("ÉLFE NAMES"), 50).await.unwrap();
        assert_eq!(ascii_case.len(), 1);
    }

    #[tokio::test]
    async fn category_pairs_are_distinct() {
        let db = connect_in_memory().await.unwrap();
        insert_many(
            &db,
            &[
                record("A", "Fantasy Races", "Elf Names", None),
                record("B", "Fantasy Races", "Elf Names", None),
                record("C", "Modern", "Robot Names", None),
            ],
        )
        .await
        .unwrap();
        let mut pairs = list_category_pairs(&db).await.unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("Fantasy Races".to_string(), "Elf Names".to_string()),
                ("Modern".to_string(), "Robot Names".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn stored_gender_round_trips() {
        let db = connect_in_memory().await.unwrap();
        let mut unisex = record("Rowan", "Characters", "Ranger Names", None);
        unisex.gender = Some(Gender::Unisex);
        let mut untagged = record("Zed", "Characters", "Ranger Names", None);
        untagged.gender = None;
        let mut elven = record("Sylvar", "Characters", "Ranger Names", None);
        elven.gender = Some(Gender::Other("elven".into()));
        insert_many(&db, &[unisex, untagged, elven]).await.unwrap();

        let found = search(&db, Some("ranger"), 50).await.unwrap();
        let rowan = found.iter().find(|r| r.name == "Rowan").unwrap();
        let zed = found.iter().find(|r| r.name == "Zed").unwrap();
        assert_eq!(rowan.gender, Some(Gender::Unisex));
        assert_eq!(zed.gender, None);
        let sylvar = found.iter().find(|r| r.name == "Sylvar").unwrap();
        assert_eq!(sylvar.gender, Some(Gender::Other("elven".into())));
        assert!(rowan.created_at.is_some());
    }
}
