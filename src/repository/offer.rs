use diesel::prelude::*;

use crate::domain::offer::Offer;
use crate::domain::types::{OfferId, PriceRange};
use crate::models::offer::{NewOffer as DbNewOffer, Offer as DbOffer};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OfferReader, OfferWriter};

fn into_domain(rows: Vec<DbOffer>) -> RepositoryResult<Vec<Offer>> {
    let items = rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Offer>, _>>()?;
    Ok(items)
}

impl OfferReader for DieselRepository {
    fn list_offers(&self) -> RepositoryResult<Vec<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let rows = offers::table
            .order(offers::id.asc())
            .select(DbOffer::as_select())
            .load::<DbOffer>(&mut conn)?;

        into_domain(rows)
    }

    fn get_offer_by_id(&self, id: OfferId) -> RepositoryResult<Option<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let offer = offers::table
            .find(id.get())
            .select(DbOffer::as_select())
            .first::<DbOffer>(&mut conn)
            .optional()?;

        let offer = offer.map(TryInto::try_into).transpose()?;
        Ok(offer)
    }

    fn offer_exists(&self, id: OfferId) -> RepositoryResult<bool> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(offers::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }

    fn list_offers_by_title(&self, title: &str) -> RepositoryResult<Vec<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let rows = offers::table
            .filter(offers::title.eq(title))
            .order(offers::id.asc())
            .select(DbOffer::as_select())
            .load::<DbOffer>(&mut conn)?;

        into_domain(rows)
    }

    fn list_offers_by_location(&self, location: &str) -> RepositoryResult<Vec<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let rows = offers::table
            .filter(offers::location.eq(location))
            .order(offers::id.asc())
            .select(DbOffer::as_select())
            .load::<DbOffer>(&mut conn)?;

        into_domain(rows)
    }

    fn list_offers_by_price(&self, range: PriceRange) -> RepositoryResult<Vec<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let rows = offers::table
            .filter(offers::price.between(range.min().get(), range.max().get()))
            .order(offers::price.asc())
            .then_order_by(offers::id.asc())
            .select(DbOffer::as_select())
            .load::<DbOffer>(&mut conn)?;

        into_domain(rows)
    }
}

impl OfferWriter for DieselRepository {
    fn save_offer(&self, offer: &Offer) -> RepositoryResult<Offer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let changes = DbNewOffer::from(offer);

        let row = match offer.id {
            None => diesel::insert_into(offers::table)
                .values(&changes)
                .returning(DbOffer::as_returning())
                .get_result::<DbOffer>(&mut conn)?,
            Some(id) => conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let updated = diesel::update(offers::table.find(id.get()))
                    .set(&changes)
                    .returning(DbOffer::as_returning())
                    .get_result::<DbOffer>(conn)
                    .optional()?;

                match updated {
                    Some(row) => Ok(row),
                    None => diesel::insert_into(offers::table)
                        .values((offers::id.eq(id.get()), &changes))
                        .returning(DbOffer::as_returning())
                        .get_result::<DbOffer>(conn),
                }
            })?,
        };

        Ok(Offer::try_from(row)?)
    }

    fn delete_offer(&self, id: OfferId) -> RepositoryResult<usize> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let affected = diesel::delete(offers::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
