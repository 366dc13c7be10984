//! Actions
//! Each action wraps one operation of the tool and runs it against any
//! `ObjectStore` or `FunctionService`.

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html>
mod putobject;
pub use self::putobject::PutObject;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html>
mod listbuckets;
pub use self::listbuckets::ListBuckets;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html>
mod listobjectsv2;
pub use self::listobjectsv2::ListObjectsV2;

// <https://docs.aws.amazon.com/lambda/latest/api/API_ListFunctions.html>
mod listfunctions;
pub use self::listfunctions::ListFunctions;

// <https://docs.aws.amazon.com/lambda/latest/api/API_Invoke.html>
mod invoke;
pub use self::invoke::Invoke;
