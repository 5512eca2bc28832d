use crate::error::StoreError;
use crate::store::DishStore;
use common::model::dish::DishRecord;
use common::model::restaurant::RestaurantRecord;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS restaurants (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    location    TEXT NOT NULL DEFAULT '',
    visit_count INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS dishes (
    id                  TEXT PRIMARY KEY,
    name                TEXT NOT NULL DEFAULT '',
    notes               TEXT NOT NULL DEFAULT '',
    image               BLOB,
    taste_rating        REAL NOT NULL,
    presentation_rating REAL NOT NULL,
    value_rating        REAL NOT NULL,
    average_rating      REAL NOT NULL,
    created_at          TEXT,
    restaurant_id       TEXT REFERENCES restaurants(id)
);
CREATE INDEX IF NOT EXISTS idx_dishes_created_at ON dishes(created_at);
CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

const DISH_COLUMNS: &str = "id, name, notes, image, taste_rating, presentation_rating, \
     value_rating, average_rating, created_at, restaurant_id";

/// SQLite-backed [`DishStore`]. One connection, serialized behind a mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = SqliteStore {
            conn: Mutex::new(Connection::open(path)?),
        };
        store.init_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = SqliteStore {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn init_schema(&self) -> Result<(), StoreError> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Unavailable)
    }

    fn query_dishes(&self, sql: &str, limit: i64) -> Result<Vec<DishRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let dishes = stmt
            .query_map(params![limit], dish_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dishes)
    }

    fn query_restaurants(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<RestaurantRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let restaurants = stmt
            .query_map(params, restaurant_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(restaurants)
    }
}

/// SQLite reads a negative LIMIT as unbounded, so oversized limits saturate instead of wrapping.
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn dish_from_row(row: &Row) -> rusqlite::Result<DishRecord> {
    Ok(DishRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        notes: row.get(2)?,
        image: row.get(3)?,
        taste_rating: row.get(4)?,
        presentation_rating: row.get(5)?,
        value_rating: row.get(6)?,
        average_rating: row.get(7)?,
        created_at: row.get(8)?,
        restaurant_id: row.get(9)?,
    })
}

fn restaurant_from_row(row: &Row) -> rusqlite::Result<RestaurantRecord> {
    Ok(RestaurantRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        visit_count: row.get(3)?,
    })
}

fn write_dish(conn: &Connection, dish: &DishRecord) -> rusqlite::Result<usize> {
    conn.execute(
        &format!("INSERT OR REPLACE INTO dishes ({DISH_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
        params![
            &dish.id,
            &dish.name,
            &dish.notes,
            &dish.image,
            dish.taste_rating,
            dish.presentation_rating,
            dish.value_rating,
            dish.average_rating,
            dish.created_at,
            &dish.restaurant_id,
        ],
    )
}

fn write_restaurant(conn: &Connection, restaurant: &RestaurantRecord) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT OR REPLACE INTO restaurants (id, name, location, visit_count) VALUES (?1, ?2, ?3, ?4)",
        params![
            &restaurant.id,
            &restaurant.name,
            &restaurant.location,
            restaurant.visit_count,
        ],
    )
}

impl DishStore for SqliteStore {
    fn fetch_dishes(&self) -> Result<Vec<DishRecord>, StoreError> {
        // LIMIT -1 means no limit in SQLite.
        self.fetch_recent_dishes_inner(-1)
    }

    fn fetch_recent_dishes(&self, limit: usize) -> Result<Vec<DishRecord>, StoreError> {
        self.fetch_recent_dishes_inner(sql_limit(limit))
    }

    fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, StoreError> {
        self.query_restaurants(
            "SELECT id, name, location, visit_count FROM restaurants ORDER BY visit_count DESC",
            params![],
        )
    }

    fn search_restaurants(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<RestaurantRecord>, StoreError> {
        self.query_restaurants(
            "SELECT id, name, location, visit_count FROM restaurants \
             WHERE instr(lower(name), lower(?1)) > 0 \
             ORDER BY visit_count DESC LIMIT ?2",
            params![fragment, sql_limit(limit)],
        )
    }

    fn favorite_restaurants(&self, limit: usize) -> Result<Vec<RestaurantRecord>, StoreError> {
        self.query_restaurants(
            "SELECT id, name, location, visit_count FROM restaurants \
             ORDER BY visit_count DESC, name ASC LIMIT ?1",
            params![sql_limit(limit)],
        )
    }

    fn find_restaurant_by_name(
        &self,
        name: &str,
    ) -> Result<Option<RestaurantRecord>, StoreError> {
        let conn = self.conn()?;
        let restaurant = conn
            .query_row(
                "SELECT id, name, location, visit_count FROM restaurants WHERE name = ?1 LIMIT 1",
                params![name],
                restaurant_from_row,
            )
            .optional()?;
        Ok(restaurant)
    }

    fn dish(&self, id: &str) -> Result<Option<DishRecord>, StoreError> {
        let conn = self.conn()?;
        let dish = conn
            .query_row(
                &format!("SELECT {DISH_COLUMNS} FROM dishes WHERE id = ?1"),
                params![id],
                dish_from_row,
            )
            .optional()?;
        Ok(dish)
    }

    fn save_dish(&self, dish: &DishRecord) -> Result<(), StoreError> {
        let conn = self.conn()?;
        write_dish(&conn, dish)?;
        Ok(())
    }

    fn delete_dish(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self
            .conn()?
            .execute("DELETE FROM dishes WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn commit_logged_dish(
        &self,
        restaurant: &RestaurantRecord,
        dish: &DishRecord,
    ) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        write_restaurant(&tx, restaurant)?;
        write_dish(&tx, dish)?;
        tx.commit()?;
        Ok(())
    }

    fn setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn()?.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SqliteStore {
    fn fetch_recent_dishes_inner(&self, limit: i64) -> Result<Vec<DishRecord>, StoreError> {
        self.query_dishes(
            &format!("SELECT {DISH_COLUMNS} FROM dishes ORDER BY created_at DESC LIMIT ?1"),
            limit,
        )
    }
}
