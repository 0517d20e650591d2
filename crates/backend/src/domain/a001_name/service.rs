use super::{repository, sample_data};
use crate::shared::config::{resolve_path, DatabaseConfig};
use crate::shared::data::db::get_connection;
use chrono::Utc;
use contracts::domain::a001_name::aggregate::{
    NameId, NameImportDto, NameRecord, MAX_NAMES_PER_REQUEST,
};
use contracts::domain::a002_category::query::CategoryQuery;
use rand::Rng;
use sea_orm::ConnectionTrait;
use std::path::Path;

/// Имена по категории через глобальное подключение
pub async fn fetch_names(category: Option<&str>) -> anyhow::Result<Vec<NameRecord>> {
    fetch_names_in(get_connection()?, category).await
}

/// Пустая категория и `all` означают выборку без фильтра; не больше 50 записей
pub async fn fetch_names_in<C: ConnectionTrait>(
    db: &C,
    category: Option<&str>,
) -> anyhow::Result<Vec<NameRecord>> {
    let query = category
        .and_then(CategoryQuery::new)
        .filter(|q| !q.is_all());
    repository::search(db, query.as_ref().map(|q| q.as_str()), MAX_NAMES_PER_REQUEST).await
}

/// Превращает DTO в записи: новые id, `created_at`, случайная популярность,
/// если её нет. Невалидные строки пропускаются с предупреждением.
fn prepare_records(rows: Vec<NameImportDto>) -> Vec<NameRecord> {
    let now = Utc::now();
    let mut rng = rand::thread_rng();
    let total = rows.len();
    let records: Vec<NameRecord> = rows
        .into_iter()
        .filter_map(|mut dto| match dto.validate() {
            Ok(()) => {
                if dto.popularity.is_none() {
                    dto.popularity = Some(rng.gen_range(0..100));
                }
                Some(NameRecord::from_import(dto, NameId::new_v4(), now))
            }
            Err(e) => {
                tracing::warn!("Skipping import row: {}", e);
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!("Skipped {} of {} import rows", total - records.len(), total);
    }
    records
}

pub async fn insert_rows<C: ConnectionTrait>(db: &C, rows: Vec<NameImportDto>) -> anyhow::Result<usize> {
    let records = prepare_records(rows);
    repository::insert_many(db, &records).await
}

/// Вставка встроенного каталога
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let inserted = insert_rows(get_connection()?, sample_data::sample_catalog()).await?;
    tracing::info!("Inserted {} sample names", inserted);
    Ok(inserted)
}

/// Чтение файла импорта: `.csv` через csv, всё остальное как JSON-массив
pub fn read_import_file(path: &Path) -> anyhow::Result<Vec<NameImportDto>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for (line, row) in reader.deserialize::<NameImportDto>().enumerate() {
            match row {
                Ok(dto) => rows.push(dto),
                // заголовок занимает первую строку
                Err(e) => tracing::warn!("Skipping CSV row {}: {}", line + 2, e),
            }
        }
        Ok(rows)
    } else {
        let contents = std::fs::read_to_string(path)?;
        let rows: Vec<NameImportDto> = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid import file {}: {}", path.display(), e))?;
        Ok(rows)
    }
}

/// Импорт из файла в базу
pub async fn import_from_file<C: ConnectionTrait>(db: &C, path: &Path) -> anyhow::Result<usize> {
    let rows = read_import_file(path)?;
    let inserted = insert_rows(db, rows).await?;
    tracing::info!("Imported {} names from {}", inserted, path.display());
    Ok(inserted)
}

/// Наполнение пустой базы при старте: файл импорта, затем встроенный каталог
pub async fn bootstrap<C: ConnectionTrait>(db: &C, config: &DatabaseConfig) -> anyhow::Result<()> {
    let existing = repository::count(db).await?;
    if existing > 0 {
        tracing::info!("Name store holds {} records", existing);
        return Ok(());
    }

    if let Some(file) = config.import_file.as_deref().filter(|f| !f.trim().is_empty()) {
        let path = resolve_path(file)?;
        import_from_file(db, &path).await?;
        return Ok(());
    }

    if config.seed_sample_data {
        let inserted = insert_rows(db, sample_data::sample_catalog()).await?;
        tracing::info!("Seeded empty name store with {} sample names", inserted);
    } else {
        tracing::warn!("Name store is empty and seeding is disabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::shared::name_filter::{filter_names, GenderFilter};
    use contracts::shared::pagination::{paginate, PAGE_SIZE};

    fn dto(name: &str, subcategory: &str) -> NameImportDto {
        NameImportDto {
            name: name.into(),
            meaning: None,
            origin: None,
            gender: Some("female".into()),
            category: "Fantasy Races".into(),
            subcategory: subcategory.into(),
            popularity: None,
        }
    }

    fn db_config(seed: bool, import_file: Option<String>) -> DatabaseConfig {
        DatabaseConfig {
            path: ":memory:".into(),
            seed_sample_data: seed,
            import_file,
        }
    }

    #[tokio::test]
    async fn elf_slug_returns_only_elves() {
        let db = connect_in_memory().await.unwrap();
        insert_rows(
            &db,
            vec![
                dto("Aelar", "Elf Names"),
                dto("Lirael", "Elf Names"),
                dto("Sylvar", "Elf Names"),
                dto("Thorin", "Dwarf Names"),
                dto("Durna", "Dwarf Names"),
            ],
        )
        .await
        .unwrap();

        let query = CategoryQuery::from_slug("elf-names").unwrap();
        let names = fetch_names_in(&db, Some(query.as_str())).await.unwrap();
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.subcategory == "Elf Names"));

        let filtered = filter_names(&names, GenderFilter::All);
        assert_eq!(filtered.len(), 3);
        let page = paginate(&filtered, 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[tokio::test]
    async fn results_are_capped() {
        let db = connect_in_memory().await.unwrap();
        let rows = (0..60).map(|i| dto(&format!("Elf {i}"), "Elf Names")).collect();
        insert_rows(&db, rows).await.unwrap();

        assert_eq!(fetch_names_in(&db, Some("elf")).await.unwrap().len(), MAX_NAMES_PER_REQUEST);
        assert_eq!(fetch_names_in(&db, Some("ALL")).await.unwrap().len(), MAX_NAMES_PER_REQUEST);
        assert_eq!(fetch_names_in(&db, Some("  ")).await.unwrap().len(), MAX_NAMES_PER_REQUEST);
        assert_eq!(fetch_names_in(&db, None).await.unwrap().len(), MAX_NAMES_PER_REQUEST);
    }

    #[tokio::test]
    async fn invalid_rows_are_skipped_and_popularity_filled() {
        let db = connect_in_memory().await.unwrap();
        let inserted = insert_rows(&db, vec![dto("", "Elf Names"), dto("Naeris", "Elf Names")])
            .await
            .unwrap();
        assert_eq!(inserted, 1);
        let names = fetch_names_in(&db, None).await.unwrap();
        let popularity = names[0].popularity.unwrap();
        assert!((0..100).contains(&popularity));
    }

    #[tokio::test]
    async fn bootstrap_seeds_only_empty_store() {
        let db = connect_in_memory().await.unwrap();
        bootstrap(&db, &db_config(false, None)).await.unwrap();
        assert_eq!(repository::count(&db).await.unwrap(), 0);

        bootstrap(&db, &db_config(true, None)).await.unwrap();
        let seeded = repository::count(&db).await.unwrap();
        assert_eq!(seeded as usize, sample_data::sample_catalog().len());

        bootstrap(&db, &db_config(true, None)).await.unwrap();
        assert_eq!(repository::count(&db).await.unwrap(), seeded);
    }

    #[tokio::test]
    async fn bootstrap_prefers_import_file() {
        let path = std::env::temp_dir().join(format!("names-import-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"name":"Kaelthar","gender":"neutral","category":"Fantasy Races","subcategory":"Dragon Names"}]"#,
        )
        .unwrap();

        let db = connect_in_memory().await.unwrap();
        bootstrap(&db, &db_config(true, Some(path.to_string_lossy().into_owned())))
            .await
            .unwrap();
        let _ = std::fs::remove_file(&path);

        let names = fetch_names_in(&db, None).await.unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].name, "Kaelthar");
    }

    #[test]
    fn csv_import_skips_bad_rows() {
        let path = std::env::temp_dir().join(format!("names-import-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "name,meaning,origin,gender,category,subcategory,popularity\n\
             Morwen,Dark maiden,Welsh,female,Fantasy Races,Vampire Names,45\n\
             Axiom,,,unisex,Modern,Robot Names,\n\
             Broken,,,male,Modern,Robot Names,not-a-number\n",
        )
        .unwrap();
        let rows = read_import_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].popularity, Some(45));
        assert_eq!(rows[1].meaning, None);
        assert_eq!(rows[1].popularity, None);
    }
}
