use common::errors::FormError;
use common::form::{LoadTicket, NoticeId};
use common::model::record::ResumeRecord;
use common::model::schema::SchemaDescriptor;
use common::requests::InsertResumeResponse;

pub enum Msg {
    LoadRecord(ResumeRecord),
    MetadataLoaded {
        ticket: LoadTicket,
        result: Result<SchemaDescriptor, FormError>,
    },
    EditField { column: String, value: String },
    Submit,
    SubmitFinished(Result<InsertResumeResponse, FormError>),
    ClearNotice(NoticeId),
}
